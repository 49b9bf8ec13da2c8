#![allow(dead_code)]

pub mod http_fixture;
pub mod mocks;
