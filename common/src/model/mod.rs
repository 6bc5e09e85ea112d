pub mod draft;
pub mod record;
pub mod staff;
