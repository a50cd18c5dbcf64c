//! blueprint-strings - Name derivation for code generators
//!
//! Every function here is a pure string transform used to turn one
//! user-supplied identifier into file names, symbol names, and path fragments:
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `innerHTML` | [`decamelize`] | `inner_html` |
//! | `my favorite items` | [`dasherize`] | `my-favorite-items` |
//! | `css-class-name` | [`camelize`] | `cssClassName` |
//! | `my favorite items` | [`classify`] | `MyFavoriteItems` |
//! | `css-class-name` | [`underscore`] | `css_class_name` |
//! | `css-class-name` | [`capitalize`] | `Css-class-name` |
//! | `regex` | [`pluralize`] | `regexes` |
//!
//! [`group`] and [`feature_path`] compose relative directory paths, and
//! [`Case`] selects a conversion by name at runtime.

mod case;
mod kind;
mod path;
mod plural;

pub use case::{camelize, capitalize, classify, dasherize, decamelize, underscore};
pub use kind::{Case, ParseCaseError};
pub use path::{feature_path, group};
pub use plural::pluralize;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Case, camelize, capitalize, classify, dasherize, decamelize, feature_path, group,
        pluralize, underscore,
    };
}
