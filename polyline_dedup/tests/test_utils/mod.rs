#![allow(dead_code)]
pub mod batch_properties;
pub mod pline_modifiers;
