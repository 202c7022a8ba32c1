use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("no browser window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("mount point #{0} not found in document")]
    MountPointMissing(String),

    #[error("content catalog is malformed: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("character {0:?} appears more than once in the catalog")]
    DuplicateCharacter(String),

    #[error("stylesheet rejected: {0}")]
    Style(#[from] stylist::Error),

    #[error("logger already initialised: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("DOM call failed while trying to {action}: {detail}")]
    Dom { action: &'static str, detail: String },
}

impl SiteError {
    /// Adapter for `map_err` on `Result<_, JsValue>` from web-sys calls.
    pub fn dom(action: &'static str) -> impl FnOnce(JsValue) -> SiteError {
        move |value| SiteError::Dom {
            action,
            detail: value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Log, Metadata, Record};

    struct Silent;

    impl Log for Silent {
        fn enabled(&self, _: &Metadata) -> bool {
            false
        }
        fn log(&self, _: &Record) {}
        fn flush(&self) {}
    }

    static SILENT: Silent = Silent;

    #[test]
    fn second_logger_install_surfaces_as_logger_error() {
        // The first call may or may not win; the second never does.
        let _ = log::set_logger(&SILENT);
        let err = log::set_logger(&SILENT).unwrap_err();

        let err = SiteError::from(err);
        assert!(matches!(err, SiteError::Logger(_)));
        assert!(err.to_string().starts_with("logger already initialised: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn malformed_catalog_keeps_the_parse_error() {
        let err = SiteError::from(serde_json::from_str::<u8>("[").unwrap_err());
        assert!(matches!(err, SiteError::Catalog(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
