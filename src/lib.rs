//! # Traitpatch: Personality Patch Templates for Trait Definitions
//!
//! Traitpatch reads a RimWorld trait definition file and writes a patch that
//! adds a `RimLife.PersonalityExtension` to every `TraitDef` it contains.
//! The personality values are left at 0 for manual tuning.
//!
//! ## Example
//!
//! Input `Traits.xml`:
//!
//! ```xml
//! <Defs>
//!   <TraitDef>
//!     <defName>Kind</defName>
//!     <degreeDatas>
//!       <li><label>gentle</label><degree>1</degree></li>
//!     </degreeDatas>
//!   </TraitDef>
//! </Defs>
//! ```
//!
//! Output `Traits_CorrectedPatch.xml` contains one `PatchOperationAdd`
//! targeting `Defs/TraitDef[defName="Kind"]` with one data entry for degree 1.

pub mod error;
pub mod document;

// Patch generation
pub mod codegen;

// Re-export key types
pub use error::{PatchError, Result};
pub use document::{Element, parse_document};
pub use codegen::{generate_patch_from_file, PatchConfig, PatchReport};
