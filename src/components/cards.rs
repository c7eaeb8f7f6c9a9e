use yew::prelude::*;

use crate::content::Card;

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    pub cards: &'static [Card],
    pub class: &'static str,
}

/// One tile per card, staggered by position.
#[function_component(CardGrid)]
pub fn card_grid(props: &CardGridProps) -> Html {
    html! {
        <div class={props.class}>
            {
                props.cards.iter().enumerate().map(|(index, card)| {
                    html! {
                        <div
                            key={card.title}
                            class="card"
                            style={format!("animation-delay: {:.1}s;", index as f64 * 0.1)}
                        >
                            <div class={card.icon.class()}>{card.icon.glyph()}</div>
                            <h4>{card.title}</h4>
                            <p>{card.description}</p>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
