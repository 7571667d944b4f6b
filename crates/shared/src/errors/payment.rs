use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentErrorKind {
    /// Rejected before or by the processor because of the request itself.
    InvalidRequest,
    /// The card was refused by the processor or the issuing bank.
    Declined,
    /// The processor did not accept the configured secret key.
    Authentication,
    /// The processor could not be reached or did not answer in time.
    Transport,
    Unexpected,
}

/// A processor failure carrying a message that is safe to show to a
/// customer. The raw processor text is logged where the error is built and
/// never stored here.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct PaymentError {
    pub kind: PaymentErrorKind,
    pub message: String,
}

impl PaymentError {
    pub fn new(kind: PaymentErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorKind::InvalidRequest, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorKind::Transport, message)
    }

    pub fn is_transport(&self) -> bool {
        self.kind == PaymentErrorKind::Transport
    }
}
