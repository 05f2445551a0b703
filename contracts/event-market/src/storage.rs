use soroban_sdk::{contracttype, Address, Env};

use eventmarket_lib::{EventRecord, ReleasePolicy, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// The event record itself
    Record,
    /// Account that instantiated the event
    Creator,
    /// Token used for lease payments
    PaymentToken,
    Policy,
    /// Set once the event has been torn down
    Destroyed,
}

/* ---------------- RECORD ---------------- */

pub fn get_record(env: &Env) -> Option<EventRecord> {
    env.storage().instance().get(&DataKey::Record)
}

pub fn set_record(env: &Env, record: &EventRecord) {
    env.storage().instance().set(&DataKey::Record, record);
    bump_instance(env);
}

/* ---------------- CREATOR ---------------- */

pub fn get_creator(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Creator)
}

pub fn set_creator(env: &Env, creator: &Address) {
    env.storage().instance().set(&DataKey::Creator, creator);
}

/* ---------------- SETTINGS ---------------- */

pub fn get_payment_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PaymentToken)
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn get_policy(env: &Env) -> ReleasePolicy {
    env.storage()
        .instance()
        .get(&DataKey::Policy)
        .unwrap_or_default()
}

pub fn set_policy(env: &Env, policy: ReleasePolicy) {
    env.storage().instance().set(&DataKey::Policy, &policy);
}

/* ---------------- TEARDOWN ---------------- */

pub fn is_destroyed(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Destroyed)
        .unwrap_or(false)
}

/// Drop every key of the instance, leaving only the tombstone.
pub fn tear_down(env: &Env) {
    let storage = env.storage().instance();
    storage.remove(&DataKey::Record);
    storage.remove(&DataKey::Creator);
    storage.remove(&DataKey::PaymentToken);
    storage.remove(&DataKey::Policy);
    storage.set(&DataKey::Destroyed, &true);
}

/* ---------------- HELPERS ---------------- */

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}
