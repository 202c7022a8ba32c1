use serde::Deserialize;
use stylist::{GlobalStyle, Style};

use crate::config::MOBILE_BREAKPOINT_PX;
use crate::error::SiteError;

pub const VIOLET: &str = "#8B5CF6";
pub const MAGENTA: &str = "#D946EF";
pub const CYAN: &str = "#06B6D4";
pub const SLATE_700: &str = "#334155";
pub const SLATE_900: &str = "#0F172A";
pub const MIDNIGHT: &str = "#020617";

/// Gradient token attached to catalog entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gradient {
    VioletMagenta,
    MagentaCyan,
    CyanViolet,
    Slate,
}

impl Gradient {
    /// (from, to) color stops.
    pub fn stops(self) -> (&'static str, &'static str) {
        match self {
            Gradient::VioletMagenta => (VIOLET, MAGENTA),
            Gradient::MagentaCyan => (MAGENTA, CYAN),
            Gradient::CyanViolet => (CYAN, VIOLET),
            Gradient::Slate => (SLATE_700, SLATE_900),
        }
    }

    pub fn linear(self, direction: &str) -> String {
        let (from, to) = self.stops();
        format!("linear-gradient({}, {}, {})", direction, from, to)
    }

    /// Generated class for the tinted overlay on top of a portrait.
    pub fn overlay_class(self) -> Result<String, SiteError> {
        let style = Style::new(format!(
            r#"
                position: absolute;
                inset: 0;
                background-image: {};
                opacity: 0.2;
                transition: opacity 0.3s ease;
            "#,
            self.linear("to top")
        ))?;
        Ok(style.get_class_name().to_string())
    }
}

/// Signature three-stop gradient used on buttons, the logo and the book mockup.
pub fn brand_gradient(direction: &str) -> String {
    format!("linear-gradient({}, {}, {}, {})", direction, VIOLET, MAGENTA, CYAN)
}

/// `@media` prefix for rules that only apply to the collapsed (mobile) nav.
pub fn mobile_query() -> String {
    format!("@media (max-width: {}px)", MOBILE_BREAKPOINT_PX - 1)
}

pub fn desktop_query() -> String {
    format!("@media (min-width: {}px)", MOBILE_BREAKPOINT_PX)
}

/// Registers the page-wide base styles. Called once at startup.
pub fn install_global_style() -> Result<GlobalStyle, SiteError> {
    let style = GlobalStyle::new(format!(
        r#"
            html {{
                scroll-behavior: smooth;
            }}
            body {{
                margin: 0;
                background: {bg};
                color: #e2e8f0;
                font-family: 'Inter', sans-serif;
                overflow-x: hidden;
            }}
            h1, h2, h3, h4 {{
                font-family: 'Playfair Display', serif;
                letter-spacing: -0.02em;
                margin: 0;
            }}
            a {{
                color: inherit;
                text-decoration: none;
            }}
            img {{
                display: block;
                max-width: 100%;
            }}
            *, *::before, *::after {{
                box-sizing: border-box;
            }}
        "#,
        bg = MIDNIGHT
    ))?;
    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Gradient; 4] = [
        Gradient::VioletMagenta,
        Gradient::MagentaCyan,
        Gradient::CyanViolet,
        Gradient::Slate,
    ];

    #[test]
    fn every_token_resolves_to_two_hex_stops() {
        for gradient in ALL {
            let (from, to) = gradient.stops();
            assert!(from.starts_with('#') && from.len() == 7);
            assert!(to.starts_with('#') && to.len() == 7);
            assert_ne!(from, to);
        }
    }

    #[test]
    fn tokens_deserialize_from_kebab_case() {
        let parsed: Vec<Gradient> =
            serde_json::from_str(r#"["violet-magenta", "magenta-cyan", "cyan-violet", "slate"]"#)
                .unwrap();
        assert_eq!(parsed, ALL.to_vec());
        assert!(serde_json::from_str::<Gradient>(r#""rainbow""#).is_err());
    }

    #[test]
    fn linear_gradient_uses_stops_in_order() {
        assert_eq!(
            Gradient::CyanViolet.linear("to top"),
            "linear-gradient(to top, #06B6D4, #8B5CF6)"
        );
    }

    #[test]
    fn breakpoint_queries_do_not_overlap() {
        assert_eq!(mobile_query(), "@media (max-width: 767px)");
        assert_eq!(desktop_query(), "@media (min-width: 768px)");
    }
}
