pub mod calculator;
pub mod flavor;
