//! Batch upsert by natural key.
//!
//! A record type opts in by implementing [`NaturalKeyed`]: it names the key that identifies
//! a row, how to look that key up, and how to build a fresh row or overwrite an existing one.
//! [`apply_batch`] then applies a whole batch in input order against any connection,
//! normally a transaction held by the calling service.

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Entity model produced by applying `I`.
pub type ModelOf<I> = <<I as NaturalKeyed>::Entity as EntityTrait>::Model;

/// A write whose target row is identified by a natural key rather than its ID.
pub trait NaturalKeyed: Sized {
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send;
    type Key: Eq + Hash + Clone + Debug;

    /// Key identifying the row this input writes to.
    fn natural_key(&self) -> Self::Key;

    /// Condition matching exactly the row stored under `key`.
    fn key_filter(key: &Self::Key) -> Condition;

    /// Active model inserting a new row from this input.
    fn create(self) -> Self::ActiveModel;

    /// Active model replacing every non-key field of `existing` with this input.
    ///
    /// Fields absent from the input are cleared, not kept.
    fn overwrite(self, existing: ModelOf<Self>) -> Self::ActiveModel;
}

/// Applies `inputs` in order, updating the row under each natural key or inserting it.
///
/// Inputs sharing a key are applied one after another, so the last one wins. Every
/// position of the returned list that shares a key holds that key's final stored state.
///
/// # Arguments
/// - `db` - Connection or transaction to write through
/// - `inputs` - Records to apply, in submission order
///
/// # Returns
/// - `Ok(Vec<Model>)` - One stored model per input, in input order
/// - `Err(DbErr)` - Lookup or write failed; a unique violation here means another writer
///   inserted the same key concurrently
pub async fn apply_batch<C, I>(db: &C, inputs: Vec<I>) -> Result<Vec<ModelOf<I>>, DbErr>
where
    C: ConnectionTrait,
    I: NaturalKeyed,
    ModelOf<I>: IntoActiveModel<I::ActiveModel> + Clone,
{
    let mut applied = Vec::with_capacity(inputs.len());

    for input in inputs {
        let key = input.natural_key();

        let existing = I::Entity::find()
            .filter(I::key_filter(&key))
            .one(db)
            .await?;

        let model = match existing {
            Some(existing) => {
                tracing::debug!("Overwriting record for key {:?}", key);
                input.overwrite(existing).update(db).await?
            }
            None => {
                tracing::debug!("Inserting record for key {:?}", key);
                input.create().insert(db).await?
            }
        };

        applied.push((key, model));
    }

    // Later entries replace earlier ones, leaving the final state per key
    let final_state: HashMap<I::Key, ModelOf<I>> = applied.iter().cloned().collect();

    Ok(applied
        .into_iter()
        .map(|(key, model)| final_state.get(&key).cloned().unwrap_or(model))
        .collect())
}
