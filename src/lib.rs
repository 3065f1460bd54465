#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use pm_reflect as reflect;
pub use pm_utils as utils;
