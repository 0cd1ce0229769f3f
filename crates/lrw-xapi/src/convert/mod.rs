//! Per-slice converters. Each is a pure function from its slice of the source
//! object to a freshly built slice of the target object.

pub mod actor;
pub mod object;
pub mod result;

pub use actor::{actor_to_agent, agent_to_actor};
pub use object::{activity_to_entity, entity_to_activity};
pub use result::{entity_to_result, result_to_entity};
