use soroban_sdk::{symbol_short, Address, Bytes, Env};

pub fn created(env: &Env, creator: &Address, price: u64) {
    env.events()
        .publish((symbol_short!("created"),), (creator.clone(), price));
}

pub fn booked(env: &Env, renter: &Address, renter_label: &Bytes, lease_expiry: u64, price: u64) {
    env.events().publish(
        (symbol_short!("booked"),),
        (renter.clone(), renter_label.clone(), lease_expiry, price),
    );
}

pub fn released(env: &Env, caller: &Address, lease_expiry: u64) {
    env.events()
        .publish((symbol_short!("released"),), (caller.clone(), lease_expiry));
}

pub fn destroyed(env: &Env, creator: &Address) {
    env.events()
        .publish((symbol_short!("destroyed"),), creator.clone());
}
