//! # Data Layer
//!
//! Registrations may declare a [`DataDefinition`]: the config it reads from
//! the `dataDefinitionArgs` prop, the data it produces and how to load it.
//! Loading itself belongs to a [`DataLoader`] collaborator that runs before
//! the middleware chain; by the time the chain runs the data is a resolved
//! [`DataState`], embedded in the component props under `data`.

use crate::error::{BoxError, DataError};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::{future::Future, pin::Pin};

/// Props key holding the embedded [`DataState`].
pub const DATA_KEY: &str = "data";

/// Props key holding the data definition config.
pub const DATA_ARGS_KEY: &str = "dataDefinitionArgs";

/// The state of a component's externally loaded data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DataState {
    /// No load was attempted during this pass.
    NotRequested,
    /// A load is in flight.
    Loading,
    /// Data is available.
    Loaded {
        /// The loaded data.
        value: Value,
    },
    /// The load failed.
    Errored {
        /// Description of the failure.
        error: String,
    },
}

impl DataState {
    /// A loaded state.
    pub fn loaded(value: impl Into<Value>) -> Self {
        DataState::Loaded {
            value: value.into(),
        }
    }

    /// A failed state.
    pub fn errored(error: impl ToString) -> Self {
        DataState::Errored {
            error: error.to_string(),
        }
    }

    /// Check whether data is available.
    pub fn is_loaded(&self) -> bool {
        matches!(self, DataState::Loaded { .. })
    }

    /// The loaded value, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            DataState::Loaded { value } => Some(value),
            _ => None,
        }
    }

    /// The props representation, e.g. `{"status": "loaded", "value": ...}`.
    pub fn to_value(&self) -> Value {
        let mut map = serde_json::Map::new();
        let status = match self {
            DataState::NotRequested => "notRequested",
            DataState::Loading => "loading",
            DataState::Loaded { value } => {
                map.insert("value".to_owned(), value.clone());
                "loaded"
            }
            DataState::Errored { error } => {
                map.insert("error".to_owned(), Value::String(error.clone()));
                "errored"
            }
        };
        map.insert("status".to_owned(), Value::String(status.to_owned()));
        Value::Object(map)
    }

    /// Parse the props representation.
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }
}

/// The decomposed data view handed to data-aware render functions.
#[derive(Debug, Clone, PartialEq)]
pub struct DataProps {
    /// The data state for this render.
    pub state: DataState,
    /// The raw `dataDefinitionArgs` config.
    pub args: Value,
}

impl DataProps {
    /// Decode the loaded data. `Ok(None)` unless the state is loaded.
    pub fn data<T: DeserializeOwned>(&self) -> Result<Option<T>, DataError> {
        self.state
            .value()
            .map(|value| T::deserialize(value).map_err(DataError::Decode))
            .transpose()
    }

    /// Decode the config.
    pub fn args<T: DeserializeOwned>(&self) -> Result<T, DataError> {
        T::deserialize(&self.args).map_err(DataError::InvalidConfig)
    }
}

/// Declares how data of shape [`Self::Data`] is derived from config of shape
/// [`Self::Config`].
///
/// `S` is the caller's service bag, available to the load.
///
/// This trait uses native `async fn` for static dispatch.
/// Registries store definitions type-erased as [`DynDataDefinition`].
pub trait DataDefinition<S>: Send + Sync + 'static {
    /// The config, decoded from `dataDefinitionArgs`.
    type Config: DeserializeOwned + Send;
    /// The loaded data, encoded into the data state.
    type Data: Serialize;

    /// Load the data for one config.
    fn load(
        &self,
        config: Self::Config,
        services: &S,
    ) -> impl Future<Output = Result<Self::Data, BoxError>> + Send;
}

/// Dynamic object-safe version of [`DataDefinition`], speaking JSON.
pub trait DynDataDefinition<S>: Send + Sync + 'static {
    /// Decode the config, load and encode the data.
    fn load_dyn<'a>(
        &'a self,
        config: &'a Value,
        services: &'a S,
    ) -> Pin<Box<dyn Future<Output = Result<Value, BoxError>> + Send + 'a>>;
}

// Blanket implementation: Any DataDefinition is a DynDataDefinition.
impl<S, D> DynDataDefinition<S> for D
where
    S: Sync,
    D: DataDefinition<S>,
{
    fn load_dyn<'a>(
        &'a self,
        config: &'a Value,
        services: &'a S,
    ) -> Pin<Box<dyn Future<Output = Result<Value, BoxError>> + Send + 'a>> {
        Box::pin(async move {
            let config = <D::Config>::deserialize(config).map_err(DataError::InvalidConfig)?;
            let data = self.load(config, services).await?;
            Ok::<_, BoxError>(serde_json::to_value(data).map_err(DataError::Encode)?)
        })
    }
}

/// The external data loader collaborator.
///
/// Given a type, its definition and the config, returns the current data
/// state. Dispatch queries it at most once per `(type, config)` per pass.
/// Failures are reported as [`DataState::Errored`], never as errors.
pub trait DataLoader<S>: Send + Sync {
    /// Resolve the data state for one component.
    fn load(
        &self,
        kind: &str,
        definition: &dyn DynDataDefinition<S>,
        config: &Value,
        services: &S,
    ) -> impl Future<Output = DataState> + Send;
}
