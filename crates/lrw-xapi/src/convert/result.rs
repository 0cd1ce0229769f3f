//! Result mapping. Only the raw score and extensions cross over, and only
//! extensions come back.

use lrw_core::constants::{CALIPER_JSONLD_CONTEXT, RESULT_ENTITY_TYPE};
use lrw_core::errors::ConversionResult;
use lrw_core::models::{ResultEntity, StatementResult};
use uuid::Uuid;

use crate::extensions::{restore_extensions, stringify_extensions};

/// Build a result entity when the statement result has a raw score.
pub fn result_to_entity(result: &StatementResult, generate_id: bool) -> Option<ResultEntity> {
    let score = result.score.as_ref().and_then(|s| s.raw)?;

    Some(ResultEntity {
        jsonld_context: Some(CALIPER_JSONLD_CONTEXT.to_string()),
        id: generate_id.then(|| Uuid::new_v4().to_string()),
        type_: RESULT_ENTITY_TYPE.to_string(),
        score: Some(score),
        extensions: stringify_extensions(&result.extensions),
    })
}

/// Carry result extensions back. The score is never restored; no extensions
/// means no result.
pub fn entity_to_result(
    entity: &ResultEntity,
    strict: bool,
) -> ConversionResult<Option<StatementResult>> {
    let extensions = restore_extensions(&entity.extensions, strict)?;
    if extensions.is_empty() {
        return Ok(None);
    }
    Ok(Some(StatementResult {
        score: None,
        extensions,
    }))
}
