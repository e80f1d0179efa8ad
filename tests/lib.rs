#![allow(dead_code)]
#![allow(unused_imports)]

#[macro_use]
extern crate aerospike;
#[macro_use]
extern crate lazy_static;

mod common;
#[macro_use]
mod src;
