use astro_config::ConfigError;
use astro_core::CoreError;
use thiserror::Error;

/// Errors raised while setting up or computing a chart.
///
/// A failing body does not fail the chart; see
/// [`crate::Diagnostic::BodySkipped`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("no location given and none configured")]
    MissingLocation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use astro_core::Body;

    #[test]
    fn wraps_lower_layers() {
        let e: ChartError = CoreError::UnsupportedBody(Body::Lilith).into();
        assert!(matches!(e, ChartError::Core(_)));
        assert!(e.to_string().contains("Lilith"));

        let e: ChartError = ConfigError::UnknownBody("x".into()).into();
        assert!(e.to_string().contains("unknown body"));
    }
}
