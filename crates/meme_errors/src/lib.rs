mod lexer;

/// Interface to display pretty errors.
pub trait ReportableError {
    /// Write pretty error to buffer.
    fn report(&self, buffer: &mut String, path: &str, text: &str);
}
