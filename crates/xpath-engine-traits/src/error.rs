//! Error types for XML tree access and XPath evaluation

/// Result type for XML engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for everything an engine adapter can report.
///
/// Messages produced by the underlying engine are carried verbatim.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// XML parsing failed
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// XPath compilation failed
    #[error("XPath compilation error: {0}")]
    XPathCompile(String),

    /// XPath evaluation failed
    #[error("XPath evaluation error: {0}")]
    XPathEval(String),

    /// The expression produced a value of the wrong kind
    #[error("Type conversion error: {0}")]
    TypeConversion(String),

    /// Node access error
    #[error("Node access error: {0}")]
    NodeAccess(String),

    /// Document or node serialization failed
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new XML parsing error
    pub fn xml_parse<S: Into<String>>(msg: S) -> Self {
        Error::XmlParse(msg.into())
    }

    /// Create a new XPath compilation error
    pub fn xpath_compile<S: Into<String>>(msg: S) -> Self {
        Error::XPathCompile(msg.into())
    }

    /// Create a new XPath evaluation error
    pub fn xpath_eval<S: Into<String>>(msg: S) -> Self {
        Error::XPathEval(msg.into())
    }

    /// Create a new type conversion error
    pub fn type_conversion<S: Into<String>>(msg: S) -> Self {
        Error::TypeConversion(msg.into())
    }

    /// True for errors raised while compiling or running an expression
    pub fn is_evaluation_error(&self) -> bool {
        matches!(self, Error::XPathCompile(_) | Error::XPathEval(_))
    }
}
