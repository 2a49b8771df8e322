use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::COMPANY;
use crate::content::SERVICES;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <img src={COMPANY.logo} alt={COMPANY.name} class="footer-logo" />
                    <p>{ COMPANY.tagline }</p>
                </div>
                <div class="footer-links">
                    <h4>{"Explore"}</h4>
                    <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                    <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                    <Link<Route> to={Route::Portfolio}>{"Portfolio"}</Link<Route>>
                    <Link<Route> to={Route::Clients}>{"Clients"}</Link<Route>>
                    <Link<Route> to={Route::Technologies}>{"Technologies"}</Link<Route>>
                </div>
                <div class="footer-services">
                    <h4>{"Services"}</h4>
                    { for SERVICES.iter().map(|service| html! { <span>{ service.title }</span> }) }
                </div>
                <div class="footer-contact">
                    <h4>{"Get in touch"}</h4>
                    <a href={format!("mailto:{}", COMPANY.email)}>{ COMPANY.email }</a>
                    <a href={format!("tel:{}", COMPANY.phone.replace(' ', ""))}>{ COMPANY.phone }</a>
                    <span>{ COMPANY.location }</span>
                </div>
                <div class="footer-social">
                    <h4>{"Follow"}</h4>
                    <a href={COMPANY.social.linkedin} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    <a href={COMPANY.social.github} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                    <a href={COMPANY.social.twitter} target="_blank" rel="noopener noreferrer">{"Twitter"}</a>
                </div>
            </div>
            <div class="footer-bottom">
                { format!("© {} {}. All rights reserved.", year, COMPANY.name) }
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #050505;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    padding: 4rem 2rem 2rem;
                    color: var(--text-muted);
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr repeat(4, 1fr);
                    gap: 2rem;
                }
                .footer-grid h4 {
                    color: #fff;
                    margin: 0 0 1rem;
                }
                .footer-links,
                .footer-services,
                .footer-contact,
                .footer-social {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .footer-grid a {
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .footer-grid a:hover {
                    color: var(--primary);
                }
                .footer-logo {
                    height: 48px;
                }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 3rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    text-align: center;
                    font-size: 0.9rem;
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
