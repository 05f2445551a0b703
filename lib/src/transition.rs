//! The event transition function.
//!
//! `apply` is pure: it reads the current record and the host-supplied call
//! context and either returns the next state or an [`EventError`]. Storage,
//! authorization of signatures and token movement stay with the caller.

use soroban_sdk::{Bytes, Env, Vec};

use crate::{
    errors::EventError,
    types::{
        BookArgs, CallContext, CreateArgs, EventRecord, GroupTxn, LeaseGroup, ReleaseArgs,
        ReleasePolicy, Request, Transition, TxnKind,
    },
    validation::{validate_field, validate_price},
    LEASE_GROUP_SIZE, PROVENANCE_NOTE,
};

pub fn apply(
    env: &Env,
    current: Option<EventRecord>,
    request: Request,
    ctx: &CallContext,
) -> Result<Transition, EventError> {
    let transition = match request {
        Request::Create(args) => {
            if current.is_some() {
                return Err(EventError::AlreadyCreated);
            }
            Transition::Commit(create(env, &args, ctx)?)
        }
        Request::Book(args) => {
            let record = current.ok_or(EventError::NotCreated)?;
            Transition::Commit(book(record, &args, ctx)?)
        }
        Request::Release(args) => {
            let record = current.ok_or(EventError::NotCreated)?;
            Transition::Commit(release(env, record, &args, ctx)?)
        }
        Request::Destroy => {
            current.ok_or(EventError::NotCreated)?;
            destroy(ctx)?;
            Transition::Discard
        }
    };

    if let Transition::Commit(record) = &transition {
        check_invariants(record)?;
    }
    Ok(transition)
}

fn create(env: &Env, args: &CreateArgs, ctx: &CallContext) -> Result<EventRecord, EventError> {
    if args.note != Bytes::from_slice(env, PROVENANCE_NOTE) {
        return Err(EventError::InvalidProvenance);
    }
    validate_price(args.price)?;
    validate_field(&args.name)?;
    validate_field(&args.description)?;
    validate_field(&args.image)?;
    validate_field(&args.owner_label)?;

    Ok(EventRecord {
        name: args.name.clone(),
        description: args.description.clone(),
        image: args.image.clone(),
        price: args.price,
        available_address: ctx.creator.clone(),
        owner_label: args.owner_label.clone(),
        is_booked: false,
        renter_label: Bytes::new(env),
        renter_address: None,
        lease_expiry: 0,
    })
}

impl LeaseGroup {
    /// Split a raw transaction group into its call and payment halves.
    pub fn from_group(group: &Vec<GroupTxn>) -> Result<Self, EventError> {
        if group.len() != LEASE_GROUP_SIZE {
            return Err(EventError::InvalidGroupSize);
        }
        let call = group.get(0).ok_or(EventError::InvalidGroupSize)?;
        let payment = group.get(1).ok_or(EventError::InvalidGroupSize)?;

        if call.kind != TxnKind::Call {
            return Err(EventError::MissingCall);
        }
        if payment.kind != TxnKind::Payment {
            return Err(EventError::MissingPayment);
        }
        Ok(LeaseGroup { call, payment })
    }
}

fn book(
    mut record: EventRecord,
    args: &BookArgs,
    ctx: &CallContext,
) -> Result<EventRecord, EventError> {
    let group = LeaseGroup::from_group(&ctx.group)?;
    if group.call.sender != ctx.caller {
        return Err(EventError::CallerMismatch);
    }

    if record.is_booked {
        return Err(EventError::AlreadyBooked);
    }
    if ctx.caller == record.available_address {
        return Err(EventError::SelfLease);
    }
    validate_field(&args.renter_label)?;
    if args.lease_end <= ctx.now {
        return Err(EventError::LeaseEndNotInFuture);
    }

    let payment = group.payment;
    if payment.receiver.as_ref() != Some(&record.available_address) {
        return Err(EventError::PaymentReceiverMismatch);
    }
    if payment.amount != record.price {
        return Err(EventError::PaymentAmountMismatch);
    }
    if payment.sender != group.call.sender {
        return Err(EventError::PaymentSenderMismatch);
    }

    record.renter_label = args.renter_label.clone();
    record.renter_address = Some(payment.sender);
    record.is_booked = true;
    record.lease_expiry = args.lease_end;
    Ok(record)
}

fn release(
    env: &Env,
    mut record: EventRecord,
    args: &ReleaseArgs,
    ctx: &CallContext,
) -> Result<EventRecord, EventError> {
    if !record.is_booked {
        return Err(EventError::NotBooked);
    }
    if ctx.now <= record.lease_expiry {
        return Err(EventError::LeaseNotExpired);
    }

    let is_owner = args.label == record.owner_label && ctx.caller == record.available_address;
    let is_renter = args.label == record.renter_label
        && record.renter_address.as_ref() == Some(&ctx.caller);
    if !is_owner && !is_renter {
        return Err(EventError::Unauthorized);
    }

    if ctx.policy == ReleasePolicy::HandOver {
        let renter = record
            .renter_address
            .clone()
            .ok_or(EventError::InvariantViolation)?;
        record.owner_label = record.renter_label.clone();
        record.available_address = renter;
    }

    record.is_booked = false;
    record.lease_expiry = 0;
    record.renter_label = Bytes::new(env);
    record.renter_address = None;
    Ok(record)
}

fn destroy(ctx: &CallContext) -> Result<(), EventError> {
    if ctx.caller != ctx.creator {
        return Err(EventError::Unauthorized);
    }
    Ok(())
}

/// Check the structural invariants every committed record must satisfy.
pub fn check_invariants(record: &EventRecord) -> Result<(), EventError> {
    if record.price == 0 {
        return Err(EventError::InvariantViolation);
    }
    let renter_cleared = record.renter_label.is_empty()
        && record.renter_address.is_none()
        && record.lease_expiry == 0;
    if record.is_booked == renter_cleared {
        return Err(EventError::InvariantViolation);
    }
    if record.is_booked && record.lease_expiry == 0 {
        return Err(EventError::InvariantViolation);
    }
    Ok(())
}
