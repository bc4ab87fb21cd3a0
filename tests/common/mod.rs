#![allow(dead_code)]

pub mod sprite_sheet;
