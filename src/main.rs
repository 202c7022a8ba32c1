use std::rc::Rc;

use log::info;
use yew::prelude::*;

mod catalog;
mod config;
mod error;
#[cfg(test)]
mod render;
mod scroll;
mod theme;
mod state {
    pub mod lead_form;
    pub mod menu;
}
mod components {
    pub mod floating_petals;
    pub mod glass_card;
    pub mod lead_form;
    pub mod petal_button;
}
mod pages {
    pub mod author;
    pub mod characters;
    pub mod discussion;
    pub mod footer;
    pub mod hero;
    pub mod innovators;
    pub mod landing;
    pub mod story;
}

use catalog::Catalog;
use components::petal_button::PetalButton;
use config::{BOOKSTORE_URL, NAV_SECTIONS, SCROLL_THRESHOLD, SITE_TITLE};
use error::SiteError;
use pages::landing::Landing;
use scroll::use_scroll_observer;
use state::menu::{MenuEvent, MenuState};
use theme::{desktop_query, mobile_query, CYAN, VIOLET};

fn nav_css() -> String {
    format!(
        r#"
        .top-nav {{
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            z-index: 50;
            padding: 1.5rem 0;
            background: transparent;
            transition: all 0.5s ease;
        }}
        .top-nav.scrolled {{
            padding: 1rem 0;
            background: rgba(0, 0, 0, 0.8);
            backdrop-filter: blur(16px);
        }}
        .nav-content {{
            max-width: 80rem;
            margin: 0 auto;
            padding: 0 1.5rem;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }}
        .nav-logo {{
            display: flex;
            align-items: center;
            gap: 0.5rem;
        }}
        .nav-mark {{
            width: 2.5rem;
            height: 2.5rem;
            display: flex;
            align-items: center;
            justify-content: center;
            border-radius: 15px 5px 15px 5px;
            background: linear-gradient(to top right, {violet}, {cyan});
            box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
        }}
        .nav-title {{
            font-size: 1.25rem;
            font-weight: 700;
            letter-spacing: -0.025em;
            background: linear-gradient(to right, white, #9ca3af);
            -webkit-background-clip: text;
            background-clip: text;
            color: transparent;
        }}
        .nav-right {{
            display: flex;
            align-items: center;
            gap: 2rem;
            font-weight: 500;
        }}
        .nav-link {{
            position: relative;
            color: rgba(255, 255, 255, 0.8);
            transition: color 0.2s ease;
        }}
        .nav-link:hover {{
            color: white;
        }}
        .nav-link::after {{
            content: '';
            position: absolute;
            bottom: -4px;
            left: 0;
            width: 0;
            height: 4px;
            border-radius: 9999px;
            background: #D946EF;
            transition: width 0.3s ease;
        }}
        .nav-link:hover::after {{
            width: 100%;
        }}
        .nav-cta {{
            font-size: 0.875rem;
            padding: 0.5rem 1.5rem;
        }}
        .burger-menu {{
            display: none;
            background: none;
            border: none;
            color: white;
            font-size: 1.5rem;
            cursor: pointer;
            position: relative;
            z-index: 60;
        }}
        .mobile-menu {{
            position: fixed;
            inset: 0;
            z-index: 40;
            background: #0F172A;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            gap: 2rem;
            animation: menuIn 0.3s ease-out both;
        }}
        .mobile-menu .nav-link {{
            font-size: 1.5rem;
            font-weight: 700;
            color: white;
        }}
        @keyframes menuIn {{
            from {{ transform: translateX(100%); }}
            to {{ transform: translateX(0); }}
        }}
        {mobile} {{
            .nav-right {{ display: none; }}
            .burger-menu {{ display: block; }}
        }}
        {desktop} {{
            .mobile-menu {{ display: none; }}
        }}
        "#,
        violet = VIOLET,
        cyan = CYAN,
        mobile = mobile_query(),
        desktop = desktop_query(),
    )
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_reducer(MenuState::default);
    let scrolled = use_scroll_observer(SCROLL_THRESHOLD);

    let on_event = {
        let menu = menu.clone();
        Callback::from(move |event: MenuEvent| menu.dispatch(event))
    };

    html! { <NavBar menu={*menu} {scrolled} {on_event} /> }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub menu: MenuState,
    pub scrolled: bool,
    pub on_event: Callback<MenuEvent>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let toggle_menu = props.on_event.reform(|e: MouseEvent| {
        e.prevent_default();
        MenuEvent::Toggle
    });
    // Not prevented: the browser still follows the anchor.
    let close_menu = props.on_event.reform(|_: MouseEvent| MenuEvent::NavLinkActivated);
    let buy_now = props.on_event.reform(|_: MouseEvent| MenuEvent::CallToActionActivated);
    let is_open = props.menu.is_open();

    let links = |class: &'static str| -> Html {
        html! {
            <>
                { for NAV_SECTIONS.iter().map(|section| html! {
                    <a key={section.anchor} href={section.href()} class={class} onclick={close_menu.clone()}>
                        {section.label}
                    </a>
                }) }
            </>
        }
    };

    let cta = html! {
        <PetalButton class="nav-cta" href={BOOKSTORE_URL} external={true} onclick={buy_now}>
            {"Buy Now"}
        </PetalButton>
    };

    // The overlay sits outside <nav>: a filtered ancestor would become the
    // containing block of its `position: fixed`.
    html! {
        <>
            <nav class={classes!("top-nav", props.scrolled.then(|| "scrolled"))}>
                <style>{nav_css()}</style>
                <div class="nav-content">
                    <a href="#" class="nav-logo" onclick={close_menu.clone()}>
                        <div class="nav-mark">{"📖"}</div>
                        <span class="nav-title">{SITE_TITLE}</span>
                    </a>

                    <div class="nav-right">
                        { links("nav-link") }
                        { cta.clone() }
                    </div>

                    <button
                        class="burger-menu"
                        aria-label="Toggle menu"
                        aria-expanded={is_open.to_string()}
                        onclick={toggle_menu}
                    >
                        { if is_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </nav>

            {
                if is_open {
                    html! {
                        <div class="mobile-menu">
                            { links("nav-link") }
                            { cta }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub catalog: Rc<Catalog>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <div class="app">
            <Nav />
            <Landing catalog={props.catalog.clone()} />
        </div>
    }
}

fn run() -> Result<(), SiteError> {
    console_log::init_with_level(config::log_level())?;

    let catalog = Catalog::load()?;
    info!(
        "Loaded catalog: {} characters, {} discussion questions",
        catalog.characters().len(),
        catalog.questions().count()
    );

    theme::install_global_style()?;

    let document = web_sys::window()
        .ok_or(SiteError::NoWindow)?
        .document()
        .ok_or(SiteError::NoDocument)?;
    let root = document
        .get_element_by_id(config::MOUNT_ID)
        .ok_or_else(|| SiteError::MountPointMissing(config::MOUNT_ID.to_string()))?;

    info!("Mounting into #{}", config::MOUNT_ID);
    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            catalog: Rc::new(catalog),
        },
    )
    .render();

    Ok(())
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = run() {
        log::error!("Startup failed: {}", err);
        wasm_bindgen::throw_str(&format!("startup failed: {}", err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;

    async fn render_nav(menu: MenuState, scrolled: bool) -> String {
        render::<NavBar>(NavBarProps {
            menu,
            scrolled,
            on_event: Callback::from(|_: MenuEvent| ()),
        })
        .await
    }

    #[tokio::test]
    async fn open_overlay_is_rendered_after_the_nav_bar() {
        let html = render_nav(MenuState::Open, true).await;

        let nav_end = html.find("</nav>").unwrap();
        let overlay = html.find(r#"class="mobile-menu""#).unwrap();
        assert!(overlay > nav_end);
        assert!(html.contains(r#"aria-expanded="true""#));
    }

    #[tokio::test]
    async fn closed_menu_renders_no_overlay() {
        let html = render_nav(MenuState::Closed, false).await;

        assert!(!html.contains(r#"class="mobile-menu""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"class="top-nav""#));
    }

    #[tokio::test]
    async fn scrolled_nav_gets_the_opaque_class() {
        let html = render_nav(MenuState::Closed, true).await;
        assert!(html.contains(r#"class="top-nav scrolled""#));
    }

    #[tokio::test]
    async fn every_section_link_appears_once_in_the_bar_and_again_in_the_overlay() {
        let closed = render_nav(MenuState::Closed, false).await;
        let open = render_nav(MenuState::Open, false).await;

        for section in NAV_SECTIONS {
            let link = format!(r#"href="{}""#, section.href());
            assert_eq!(closed.matches(&link).count(), 1, "{}", section.label);
            assert_eq!(open.matches(&link).count(), 2, "{}", section.label);
        }
    }
}
