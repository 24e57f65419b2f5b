pub mod triangulation;

#[doc(inline)]
pub use triangulation::bridge::bridge_holes;
#[doc(inline)]
pub use triangulation::earclip::earclip;
