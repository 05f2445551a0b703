#![no_std]

mod events;
mod storage;

use soroban_sdk::{contract, contractimpl, token, vec, Address, Bytes, Env, Vec};
use eventmarket_lib::{
    apply,
    codec::{decode_call, decode_create},
    BookArgs,
    CallContext,
    CallRequest,
    CreateArgs,
    EventDetails,
    EventError,
    EventRecord,
    GroupTxn,
    ReleaseArgs,
    ReleasePolicy,
    Request,
    Transition,
};

use storage::*;

#[contract]
pub struct EventMarket;

#[contractimpl]
impl EventMarket {
    /// Instantiate the event. Runs once per contract instance.
    ///
    /// `creator` becomes the payee for the first lease and the only account
    /// allowed to destroy the event.
    pub fn create(
        env: Env,
        creator: Address,
        details: EventDetails,
        note: Bytes,
        token: Address,
        policy: ReleasePolicy
    ) -> Result<(), EventError> {
        Self::instantiate_with(&env, creator, CreateArgs::from_details(details, note), token, policy)
    }

    /// Byte-string form of `create`: `[name, description, image, price,
    /// owner_label]`, price big-endian.
    pub fn instantiate(
        env: Env,
        creator: Address,
        args: Vec<Bytes>,
        note: Bytes,
        token: Address,
        policy: ReleasePolicy
    ) -> Result<(), EventError> {
        let create = decode_create(&args, &note)?;
        Self::instantiate_with(&env, creator, create, token, policy)
    }

    /// Lease the event until `lease_end`, paying the current price to the
    /// current payee in the same invocation.
    pub fn book(
        env: Env,
        caller: Address,
        renter_label: Bytes,
        lease_end: u64
    ) -> Result<(), EventError> {
        caller.require_auth();

        let current = get_record(&env).ok_or(EventError::NotCreated)?;
        let payee = current.available_address.clone();
        let price = current.price;

        // The payment half of the group is the transfer made below.
        let group = vec![&env, GroupTxn::call(&caller), GroupTxn::payment(&caller, &payee, price)];
        let ctx = Self::context(&env, &caller, group)?;
        let request = Request::Book(BookArgs { renter_label, lease_end });
        let record = Self::commit(&env, Some(current), request, &ctx)?;

        let token_client = token::Client::new(&env, &Self::token(&env)?);
        token_client.transfer(&caller, &payee, &i128::from(price));

        set_record(&env, &record);

        events::booked(&env, &caller, &record.renter_label, record.lease_expiry, price);
        Ok(())
    }

    /// End an expired lease. Callable by the owner or the renter, each
    /// presenting their label.
    pub fn release(env: Env, caller: Address, label: Bytes) -> Result<(), EventError> {
        caller.require_auth();

        let current = get_record(&env).ok_or(EventError::NotCreated)?;
        let ended = current.lease_expiry;

        let ctx = Self::context(&env, &caller, Vec::new(&env))?;
        let request = Request::Release(ReleaseArgs { label });
        let record = Self::commit(&env, Some(current), request, &ctx)?;

        set_record(&env, &record);

        events::released(&env, &caller, ended);
        Ok(())
    }

    /// Tear the event down. Only the instantiating account may do this.
    pub fn destroy(env: Env, caller: Address) -> Result<(), EventError> {
        caller.require_auth();

        let ctx = Self::context(&env, &caller, Vec::new(&env))?;
        match apply(&env, get_record(&env), Request::Destroy, &ctx)? {
            Transition::Discard => {}
            Transition::Commit(_) => {
                return Err(EventError::InvariantViolation);
            }
        }

        tear_down(&env);

        events::destroyed(&env, &ctx.creator);
        Ok(())
    }

    /// Byte-string call ABI: `["book", renter_label, lease_end]` or
    /// `["sell", label]`, integers big-endian.
    pub fn dispatch(env: Env, caller: Address, args: Vec<Bytes>) -> Result<(), EventError> {
        match decode_call(&env, &args)? {
            CallRequest::Book(book) => Self::book(env, caller, book.renter_label, book.lease_end),
            CallRequest::Release(release) => Self::release(env, caller, release.label),
        }
    }

    /* ---------------- READERS ---------------- */

    pub fn get_event(env: Env) -> Option<EventRecord> {
        get_record(&env)
    }

    pub fn is_booked(env: Env) -> bool {
        get_record(&env).map(|record| record.is_booked).unwrap_or(false)
    }

    pub fn creator(env: Env) -> Option<Address> {
        get_creator(&env)
    }

    pub fn payment_token(env: Env) -> Option<Address> {
        get_payment_token(&env)
    }

    pub fn release_policy(env: Env) -> ReleasePolicy {
        get_policy(&env)
    }
}

impl EventMarket {
    fn instantiate_with(
        env: &Env,
        creator: Address,
        create: CreateArgs,
        token: Address,
        policy: ReleasePolicy
    ) -> Result<(), EventError> {
        creator.require_auth();

        if is_destroyed(env) {
            return Err(EventError::Destroyed);
        }

        let ctx = CallContext {
            caller: creator.clone(),
            creator: creator.clone(),
            now: env.ledger().timestamp(),
            group: vec![env, GroupTxn::call(&creator)],
            policy,
        };
        let record = Self::commit(env, get_record(env), Request::Create(create), &ctx)?;

        set_creator(env, &creator);
        set_payment_token(env, &token);
        set_policy(env, policy);
        set_record(env, &record);

        events::created(env, &creator, record.price);
        Ok(())
    }

    fn context(env: &Env, caller: &Address, group: Vec<GroupTxn>) -> Result<CallContext, EventError> {
        let creator = get_creator(env).ok_or(EventError::NotCreated)?;
        Ok(CallContext {
            caller: caller.clone(),
            creator,
            now: env.ledger().timestamp(),
            group,
            policy: get_policy(env),
        })
    }

    fn commit(
        env: &Env,
        current: Option<EventRecord>,
        request: Request,
        ctx: &CallContext
    ) -> Result<EventRecord, EventError> {
        match apply(env, current, request, ctx)? {
            Transition::Commit(record) => Ok(record),
            Transition::Discard => Err(EventError::InvariantViolation),
        }
    }

    fn token(env: &Env) -> Result<Address, EventError> {
        get_payment_token(env).ok_or(EventError::NotCreated)
    }
}
