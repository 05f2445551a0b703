use soroban_sdk::contracterror;

/// Rejection reasons for every event transition.
///
/// Codes are stable and grouped by category so that clients can classify a
/// failure from the number alone (see [`EventError::kind`]).
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EventError {
    // Malformed request
    InvalidArgumentCount = 1,
    InvalidNumber = 2,
    EmptyField = 3,
    FieldTooLong = 4,
    InvalidProvenance = 5,
    UnknownMethod = 6,
    InvalidPrice = 7,

    // Precondition
    AlreadyCreated = 10,
    NotCreated = 11,
    AlreadyBooked = 12,
    NotBooked = 13,
    Destroyed = 14,

    // Authorization
    Unauthorized = 20,
    SelfLease = 21,

    // Atomicity / payment
    InvalidGroupSize = 30,
    MissingCall = 31,
    MissingPayment = 32,
    CallerMismatch = 33,
    PaymentReceiverMismatch = 34,
    PaymentAmountMismatch = 35,
    PaymentSenderMismatch = 36,

    // Temporal
    LeaseEndNotInFuture = 40,
    LeaseNotExpired = 41,

    InvariantViolation = 50,
}

/// Coarse category of an [`EventError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    MalformedRequest,
    Precondition,
    Authorization,
    Atomicity,
    Temporal,
    Invariant,
}

impl EventError {
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 {
            1..=9 => ErrorKind::MalformedRequest,
            10..=19 => ErrorKind::Precondition,
            20..=29 => ErrorKind::Authorization,
            30..=39 => ErrorKind::Atomicity,
            40..=49 => ErrorKind::Temporal,
            _ => ErrorKind::Invariant,
        }
    }
}
