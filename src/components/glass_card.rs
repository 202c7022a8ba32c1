use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GlassCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(GlassCard)]
pub fn glass_card(props: &GlassCardProps) -> Html {
    html! {
        <div class={classes!("glass-card", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

pub const CSS: &str = r#"
    .glass-card {
        backdrop-filter: blur(24px);
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1rem;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
        padding: 1.5rem;
    }
"#;
