//! Target selection: primary-target resolution, scope expansion, and the
//! pairwise eligibility filter that gates every affected candidate.

mod affect_object;
mod affect_scope;
mod target_type;

pub use affect_object::AffectObject;
pub use affect_scope::AffectScope;
pub use target_type::{TargetError, TargetType};
