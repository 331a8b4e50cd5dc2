use super::{RuleContext, Strategy};
use crate::core::{ErrorCode, RuleError};
use crate::document::{HasEmission, HasIdentification};
use crate::values::{ContingencyType, ModelType, OperationType};

/// Contingency transmissions declare why; normal ones declare nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContingencyStrategy;

impl<D> Strategy<D> for ContingencyStrategy
where
    D: HasIdentification,
{
    fn name(&self) -> &'static str {
        "contingency"
    }

    fn validate(&self, doc: &D, _ctx: &RuleContext<'_>) -> Option<RuleError> {
        let id = doc.identification()?;
        let mut errors = Vec::new();
        match id.operation_type() {
            OperationType::Contingency => match id.contingency_type() {
                None => errors.push(RuleError::new(
                    ErrorCode::ContingencyTypeRequired,
                    Vec::<String>::new(),
                )),
                Some(ContingencyType::Other) if id.contingency_reason().is_none() => {
                    errors.push(RuleError::new(
                        ErrorCode::ContingencyReasonRequired,
                        [ContingencyType::Other.code()],
                    ))
                }
                Some(_) => {}
            },
            OperationType::Normal => {
                if id.contingency_type().is_some() {
                    errors.push(RuleError::new(ErrorCode::ContingencyNotAllowed, ["type"]));
                }
                if id.contingency_reason().is_some() {
                    errors.push(RuleError::new(ErrorCode::ContingencyNotAllowed, ["reason"]));
                }
            }
        }
        RuleError::collect(errors)
    }
}

/// Normal transmission uses previous invoicing; contingency uses deferred.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelTypeStrategy;

impl<D> Strategy<D> for ModelTypeStrategy
where
    D: HasIdentification,
{
    fn name(&self) -> &'static str {
        "model_type"
    }

    fn validate(&self, doc: &D, _ctx: &RuleContext<'_>) -> Option<RuleError> {
        let id = doc.identification()?;
        let expected = match id.operation_type() {
            OperationType::Normal => ModelType::Previous,
            OperationType::Contingency => ModelType::Deferred,
        };
        (id.model_type() != expected).then(|| {
            RuleError::new(
                ErrorCode::ModelTypeMismatch,
                [
                    id.operation_type().code(),
                    expected.code(),
                    id.model_type().code(),
                ],
            )
        })
    }
}

/// Emission date and time are not in the future.
///
/// The date is compared strictly; the time only matters when the document
/// is dated today.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemporalStrategy;

impl<D> Strategy<D> for TemporalStrategy
where
    D: HasEmission,
{
    fn name(&self) -> &'static str {
        "temporal"
    }

    fn validate(&self, doc: &D, ctx: &RuleContext<'_>) -> Option<RuleError> {
        let date = doc.emission_date()?;
        let today = ctx.now.date();
        if date.value() > today {
            return Some(RuleError::new(
                ErrorCode::FutureDate,
                ["emission_date".to_string(), date.to_string()],
            ));
        }
        let time = doc.emission_time()?;
        (date.value() == today && time.value() > ctx.now.time()).then(|| {
            RuleError::new(
                ErrorCode::FutureTime,
                ["emission_time".to_string(), time.to_string()],
            )
        })
    }
}
