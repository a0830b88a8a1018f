// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod code;
pub mod hotlink;

pub use code::{embed_code, orientation, Orientation, PhotoRecord};
pub use hotlink::{hotlink_to_embed, HotlinkUrl, MalformedUrlError};
