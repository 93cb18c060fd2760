mod classify;
mod names;
mod store_invariants;
mod synthetic;
mod z_relation;
