//! Circuit content hosted by the witcalc engine.
//!
//! Each module is one circuit the way a code generator following the engine's
//! conventions would emit it: monomorphized template bodies, a layout derived
//! from per-template `SIGNALS`/`COMPONENTS` constants, a
//! [`TemplateSet`](witcalc_processor::TemplateSet) dispatch impl, and instance
//! descriptors. The engine executes these bodies but knows nothing about
//! their content.

pub mod grid4;
