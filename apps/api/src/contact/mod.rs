// Contact form: validation of the visitor's draft and simulated delivery.
// Drafts are never stored; delivery is a trait so a real mail backend can slot in.

pub mod delivery;
pub mod handlers;
pub mod validation;
