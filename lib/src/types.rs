use soroban_sdk::{contracttype, Address, Bytes, Vec};

// ---------------------------------------------------------------------------
// EventRecord
// ---------------------------------------------------------------------------

/// Full on-chain state of a single leasable event.
///
/// One record exists per deployed contract instance. The renter fields are
/// only populated while `is_booked` is set.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventRecord {
    pub name: Bytes,
    pub description: Bytes,
    pub image: Bytes,
    /// Lease price, fixed at creation.
    pub price: u64,
    /// Account that receives the next lease payment.
    pub available_address: Address,
    /// Label of the party entitled to end a booking.
    pub owner_label: Bytes,
    pub is_booked: bool,
    pub renter_label: Bytes,
    pub renter_address: Option<Address>,
    /// Unix seconds after which the lease may be ended. Zero when free.
    pub lease_expiry: u64,
}

impl EventRecord {
    pub fn is_available(&self) -> bool {
        !self.is_booked
    }
}

/// Descriptive fields supplied when an event is created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventDetails {
    pub name: Bytes,
    pub description: Bytes,
    pub image: Bytes,
    pub price: u64,
    pub owner_label: Bytes,
}

/// What happens to the owner fields when a booking ends.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ReleasePolicy {
    /// Owner label and payout address stay with the current owner.
    Retain = 0,
    /// The departing renter becomes the owner and the next payee.
    HandOver = 1,
}

/// The departing renter takes over, so each lease pays whoever held the
/// event before it.
impl Default for ReleasePolicy {
    fn default() -> Self {
        ReleasePolicy::HandOver
    }
}

// ---------------------------------------------------------------------------
// Transaction group
// ---------------------------------------------------------------------------

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TxnKind {
    Call = 0,
    Payment = 1,
}

/// One member of the transaction group submitted alongside a request.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupTxn {
    pub kind: TxnKind,
    pub sender: Address,
    pub receiver: Option<Address>,
    pub amount: u64,
}

impl GroupTxn {
    pub fn call(sender: &Address) -> Self {
        GroupTxn {
            kind: TxnKind::Call,
            sender: sender.clone(),
            receiver: None,
            amount: 0,
        }
    }

    pub fn payment(sender: &Address, receiver: &Address, amount: u64) -> Self {
        GroupTxn {
            kind: TxnKind::Payment,
            sender: sender.clone(),
            receiver: Some(receiver.clone()),
            amount,
        }
    }
}

/// A lease group that has passed its structural checks: the control call
/// first, the payment second.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeaseGroup {
    pub call: GroupTxn,
    pub payment: GroupTxn,
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateArgs {
    pub name: Bytes,
    pub description: Bytes,
    pub image: Bytes,
    pub price: u64,
    pub owner_label: Bytes,
    /// Provenance note carried by the creating transaction.
    pub note: Bytes,
}

impl CreateArgs {
    pub fn from_details(details: EventDetails, note: Bytes) -> Self {
        CreateArgs {
            name: details.name,
            description: details.description,
            image: details.image,
            price: details.price,
            owner_label: details.owner_label,
            note,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BookArgs {
    pub renter_label: Bytes,
    pub lease_end: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReleaseArgs {
    pub label: Bytes,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Request {
    Create(CreateArgs),
    Book(BookArgs),
    Release(ReleaseArgs),
    Destroy,
}

/// An ordinary call, routed by its leading argument tag.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CallRequest {
    Book(BookArgs),
    Release(ReleaseArgs),
}

impl From<CallRequest> for Request {
    fn from(call: CallRequest) -> Self {
        match call {
            CallRequest::Book(args) => Request::Book(args),
            CallRequest::Release(args) => Request::Release(args),
        }
    }
}

/// Facts about the running invocation, supplied by the host.
#[derive(Clone, Debug)]
pub struct CallContext {
    pub caller: Address,
    /// Account that instantiated the event. Equals `caller` during creation.
    pub creator: Address,
    /// Ledger timestamp of the invocation.
    pub now: u64,
    pub group: Vec<GroupTxn>,
    pub policy: ReleasePolicy,
}

/// Outcome of an accepted request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Transition {
    Commit(EventRecord),
    Discard,
}
