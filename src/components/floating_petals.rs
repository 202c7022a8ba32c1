use yew::prelude::*;

const PETAL_COUNT: usize = 15;

/// Where and when a single petal falls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PetalLayout {
    pub delay_secs: f64,
    pub left_percent: f64,
    pub scale: f64,
}

/// Petal `index` starts `2s * index` late, `7% * index` from the left, with a
/// scale spread over `0.5..=1.4`.
pub fn petal_layout(index: usize) -> PetalLayout {
    PetalLayout {
        delay_secs: index as f64 * 2.0,
        left_percent: index as f64 * 7.0,
        scale: 0.5 + ((index * 7) % 10) as f64 / 10.0,
    }
}

#[function_component(FloatingPetals)]
pub fn floating_petals() -> Html {
    html! {
        <div class="petal-field" aria-hidden="true">
            <style>
                {r#"
                    .petal-field {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        opacity: 0.4;
                        overflow: hidden;
                    }
                    .petal {
                        position: absolute;
                        top: -100px;
                        opacity: 0;
                        animation: petalFall 15s linear infinite;
                    }
                    .petal-shape {
                        width: 1.5rem;
                        height: 2.5rem;
                        background: linear-gradient(to bottom right, rgba(249, 168, 212, 0.2), rgba(217, 70, 239, 0.1));
                        border-radius: 50% 50% 50% 50% / 80% 80% 20% 20%;
                        transform: rotate(45deg);
                    }
                    @keyframes petalFall {
                        0% { transform: translate(0, 0) rotate(0deg); opacity: 0; }
                        33% { transform: translate(50px, 36vh) rotate(120deg); opacity: 0.4; }
                        66% { transform: translate(-50px, 73vh) rotate(240deg); opacity: 0.4; }
                        100% { transform: translate(0, 110vh) rotate(360deg); opacity: 0; }
                    }
                "#}
            </style>
            { for (0..PETAL_COUNT).map(|i| {
                let layout = petal_layout(i);
                html! {
                    <div
                        key={i}
                        class="petal"
                        style={format!(
                            "left: {}%; animation-delay: {}s; scale: {};",
                            layout.left_percent, layout.delay_secs, layout.scale
                        )}
                    >
                        <div class="petal-shape"></div>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn petals_are_staggered_across_the_hero() {
        assert_eq!(petal_layout(0).delay_secs, 0.0);
        assert_eq!(petal_layout(3).delay_secs, 6.0);
        assert_eq!(petal_layout(14).left_percent, 98.0);
    }

    #[test]
    fn scales_stay_in_range_and_are_deterministic() {
        for i in 0..PETAL_COUNT {
            let scale = petal_layout(i).scale;
            assert!((0.5..=1.4 + f64::EPSILON).contains(&scale), "petal {} scale {}", i, scale);
            assert_eq!(petal_layout(i), petal_layout(i));
        }
    }
}
