use yew::prelude::*;

use crate::content::Testimonial;

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: Testimonial,
}

fn stars(rating: u8) -> String {
    "★".repeat(rating.min(5) as usize)
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = &props.testimonial;
    html! {
        <figure class="glass-card testimonial-card">
            <div class="testimonial-stars" aria-label={format!("{} out of 5", t.rating)}>
                { stars(t.rating) }
            </div>
            <blockquote>{ format!("\u{201c}{}\u{201d}", t.quote) }</blockquote>
            <figcaption>
                <strong>{ t.name }</strong>
                <span>{ t.role }</span>
                <span class="testimonial-project">{ t.project }</span>
            </figcaption>
            <style>
                {r#"
                .testimonial-card {
                    margin: 0;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .testimonial-stars {
                    color: #fbbf24;
                    letter-spacing: 0.15rem;
                }
                .testimonial-card blockquote {
                    margin: 0;
                    font-style: italic;
                    flex: 1;
                }
                .testimonial-card figcaption {
                    display: flex;
                    flex-direction: column;
                    gap: 0.2rem;
                    font-size: 0.9rem;
                    color: var(--text-muted);
                }
                .testimonial-card figcaption strong {
                    color: #fff;
                }
                .testimonial-project {
                    color: var(--accent);
                }
                "#}
            </style>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_cap_at_five() {
        assert_eq!(stars(4).chars().count(), 4);
        assert_eq!(stars(9).chars().count(), 5);
    }
}
