//! Decoding of the raw byte-string call ABI into typed requests.
//!
//! Argument layout per request:
//!
//! | Request | Arguments |
//! |---|---|
//! | create | `name, description, image, price, owner_label` (+ provenance note) |
//! | book | `"book", renter_label, lease_end` |
//! | sell | `"sell", label` |
//!
//! Integers are big-endian, at most eight bytes.

use soroban_sdk::{Bytes, Env, Vec};

use crate::{
    errors::EventError,
    types::{BookArgs, CallRequest, CreateArgs, ReleaseArgs},
    validation::parse_uint,
    BOOK_ARG_COUNT, BOOK_TAG, CREATE_ARG_COUNT, SELL_ARG_COUNT, SELL_TAG,
};

/// Decodes the arguments of the instantiating call. Price is parsed here; the
/// remaining checks belong to the create rule.
pub fn decode_create(args: &Vec<Bytes>, note: &Bytes) -> Result<CreateArgs, EventError> {
    expect_len(args, CREATE_ARG_COUNT)?;
    Ok(CreateArgs {
        name: arg(args, 0)?,
        description: arg(args, 1)?,
        image: arg(args, 2)?,
        price: parse_uint(&arg(args, 3)?)?,
        owner_label: arg(args, 4)?,
        note: note.clone(),
    })
}

pub fn decode_call(env: &Env, args: &Vec<Bytes>) -> Result<CallRequest, EventError> {
    let tag = arg(args, 0)?;
    if tag == Bytes::from_slice(env, BOOK_TAG) {
        decode_book(args)
    } else if tag == Bytes::from_slice(env, SELL_TAG) {
        decode_sell(args)
    } else {
        Err(EventError::UnknownMethod)
    }
}

fn decode_book(args: &Vec<Bytes>) -> Result<CallRequest, EventError> {
    expect_len(args, BOOK_ARG_COUNT)?;
    Ok(CallRequest::Book(BookArgs {
        renter_label: arg(args, 1)?,
        lease_end: parse_uint(&arg(args, 2)?)?,
    }))
}

fn decode_sell(args: &Vec<Bytes>) -> Result<CallRequest, EventError> {
    expect_len(args, SELL_ARG_COUNT)?;
    Ok(CallRequest::Release(ReleaseArgs {
        label: arg(args, 1)?,
    }))
}

fn expect_len(args: &Vec<Bytes>, len: u32) -> Result<(), EventError> {
    if args.len() != len {
        return Err(EventError::InvalidArgumentCount);
    }
    Ok(())
}

fn arg(args: &Vec<Bytes>, index: u32) -> Result<Bytes, EventError> {
    args.get(index).ok_or(EventError::InvalidArgumentCount)
}
