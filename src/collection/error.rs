use thiserror::Error;

/// Why the smaps path produced no measurement.
///
/// None of these are fatal; every variant makes the probe fall back to the
/// `ps` path for the current measurement. The variants exist purely for
/// diagnostics.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report could not be opened or read.
    #[error("unable to read the smaps report, {0}")]
    Io(#[from] std::io::Error),

    /// The requested measurement kind has no smaps category label.
    #[error("the requested measurement kind has no smaps category")]
    UnsupportedKind,

    /// The report contained no lines for the requested category.
    #[error("no matching category lines in the smaps report")]
    NoData,

    /// A matching line did not split into exactly label, value, and unit,
    /// or carried a unit we don't recognize.
    #[error("malformed smaps line")]
    MalformedLine,
}

/// A [`Result`] with the error type being a [`ReportError`].
pub(crate) type CollectionResult<T> = Result<T, ReportError>;
