use std::rc::Rc;

use yew::prelude::*;

use crate::catalog::{Catalog, Character};
use crate::components::glass_card::GlassCard;
use crate::config::CHARACTERS_ID;

/// Entrance delay for the card at `position`, in milliseconds.
pub fn stagger_delay_ms(position: usize) -> u32 {
    position as u32 * 100
}

#[derive(Properties, PartialEq)]
pub struct CharacterCardProps {
    pub character: Character,
    pub position: usize,
}

#[function_component(CharacterCard)]
pub fn character_card(props: &CharacterCardProps) -> Html {
    let CharacterCardProps { character, position } = props;

    let overlay = match character.gradient.overlay_class() {
        Ok(class) => class,
        Err(err) => {
            log::warn!("no gradient overlay for {}: {}", character.name, err);
            String::new()
        }
    };

    html! {
        <div
            class="character"
            style={format!("animation-delay: {}ms;", stagger_delay_ms(*position))}
        >
            <GlassCard class="character-card">
                <div class="portrait">
                    <img src={character.image.clone()} alt={character.name.clone()} loading="lazy" />
                    <div class={classes!("tint", overlay)}></div>
                </div>
                <div class="character-body">
                    <h3>{&character.name}</h3>
                    <p class="character-role">{&character.role}</p>
                    <p class="character-description">{&character.description}</p>
                </div>
            </GlassCard>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CharactersSectionProps {
    pub catalog: Rc<Catalog>,
}

#[function_component(CharactersSection)]
pub fn characters_section(props: &CharactersSectionProps) -> Html {
    html! {
        <section id={CHARACTERS_ID} class="characters">
            <style>
                {r#"
                    .characters {
                        padding: 6rem 0;
                        background: #020617;
                        position: relative;
                    }
                    .characters-header {
                        margin-bottom: 4rem;
                        text-align: center;
                    }
                    .characters-header p {
                        color: #94a3b8;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .character-grid {
                        display: grid;
                        gap: 2rem;
                    }
                    .character {
                        animation: riseIn 0.6s ease-out both;
                        transition: transform 0.3s ease;
                    }
                    .character:hover {
                        transform: translateY(-10px);
                    }
                    .character-card {
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        padding: 0;
                        overflow: hidden;
                        border-color: rgba(255, 255, 255, 0.05);
                        transition: border-color 0.3s ease;
                    }
                    .character:hover .character-card {
                        border-color: rgba(255, 255, 255, 0.2);
                    }
                    .portrait {
                        position: relative;
                        height: 16rem;
                        overflow: hidden;
                    }
                    .portrait img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        filter: grayscale(1);
                        transition: filter 0.7s ease;
                    }
                    .character:hover .portrait img {
                        filter: grayscale(0);
                    }
                    .character:hover .tint {
                        opacity: 0.4;
                    }
                    .character-body {
                        padding: 1.5rem;
                        flex-grow: 1;
                    }
                    .character-body h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: white;
                        margin-bottom: 0.25rem;
                    }
                    .character-role {
                        color: #06B6D4;
                        font-size: 0.875rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        margin: 0 0 1rem;
                    }
                    .character-description {
                        color: #94a3b8;
                        font-size: 0.875rem;
                        line-height: 1.6;
                        margin: 0;
                    }
                    @media (min-width: 768px) {
                        .character-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .character-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                "#}
            </style>
            <div class="container">
                <div class="characters-header">
                    <h2 class="section-title">
                        {"Meet the "}<span class="gradient-text">{"Survivors"}</span>
                    </h2>
                    <p>{"The tech-noir landscape of Riverside is shaped by visionaries and villains alike."}</p>
                </div>
                <div class="character-grid">
                    { for props.catalog.characters().iter().enumerate().map(|(position, character)| html! {
                        <CharacterCard
                            key={character.name.clone()}
                            character={character.clone()}
                            {position}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;

    #[test]
    fn cards_enter_a_tenth_of_a_second_apart() {
        let delays: Vec<u32> = (0..4).map(stagger_delay_ms).collect();
        assert_eq!(delays, [0, 100, 200, 300]);
    }

    #[tokio::test]
    async fn renders_one_card_per_character_in_catalog_order() {
        let catalog = Rc::new(Catalog::load().unwrap());
        let html = render::<CharactersSection>(CharactersSectionProps {
            catalog: catalog.clone(),
        })
        .await;

        assert_eq!(html.matches(r#"class="character""#).count(), 4);

        let positions: Vec<usize> = catalog
            .characters()
            .iter()
            .map(|c| html.find(&format!("<h3>{}</h3>", c.name)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(html.contains("animation-delay: 300ms;"));
    }
}
