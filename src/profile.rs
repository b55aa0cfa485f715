pub mod preset;
use crate::{
    context::Context,
    process::{ChainedProcess, DynamicProcess, EmptyProcess, Process},
    stage::Stage,
};
use std::borrow::Cow;
use tracing::trace;

/// A named cleaner pipeline: stages that run in order, each on the previous
/// output.
///
/// Running a profile cannot fail. Every [`Stage`] is total over `&str`, so
/// the only errors in this crate come from resolving names and language
/// codes ([`CleanerError`](crate::CleanerError)), never from cleaning text.
///
/// Two ways to build one:
/// * [`Profile::builder`] nests stages into a [`ChainedProcess`] type, the
///   form the named presets in [`preset`] use;
/// * [`Profile::plugin_builder`] collects boxed stages chosen at runtime.
#[derive(Debug, Clone)]
pub struct Profile<P: Process> {
    name: &'static str,
    pipeline: P,
}

impl<P: Process> Profile<P> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Cleans `text` under `ctx`. Borrowed input stays borrowed when no
    /// stage changes it.
    pub fn run<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        trace!(profile = self.name, lang = ctx.lang.code(), "running profile");
        self.pipeline.process(text, ctx)
    }
}

impl Profile<EmptyProcess> {
    /// Start a pipeline whose stage list is fixed at compile time.
    pub fn builder(name: &'static str) -> ProfileBuilder<EmptyProcess> {
        ProfileBuilder::new(name)
    }
}

/// Builder for a statically chained profile. Each `add_stage` wraps the
/// chain so far, which makes the stage order part of the profile's type.
pub struct ProfileBuilder<P: Process> {
    name: &'static str,
    current: P,
}

impl ProfileBuilder<EmptyProcess> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            current: EmptyProcess,
        }
    }
}

impl<P: Process> ProfileBuilder<P> {
    pub fn add_stage<S: Stage + 'static>(self, stage: S) -> ProfileBuilder<ChainedProcess<S, P>> {
        ProfileBuilder {
            name: self.name,
            current: ChainedProcess {
                stage,
                previous: self.current,
            },
        }
    }

    pub fn build(self) -> Profile<P> {
        Profile {
            name: self.name,
            pipeline: self.current,
        }
    }
}

impl Profile<DynamicProcess> {
    /// Start a pipeline assembled at runtime, e.g. from a configuration list.
    pub fn plugin_builder(name: &'static str) -> DynProfileBuilder {
        DynProfileBuilder {
            name,
            pipeline: DynamicProcess::new(),
        }
    }

    /// Stage names in run order, as used in `trace!` events.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pipeline.stage_names()
    }
}

/// Builder for a runtime-assembled profile.
pub struct DynProfileBuilder {
    name: &'static str,
    pipeline: DynamicProcess,
}

impl DynProfileBuilder {
    pub fn add_stage<T: Stage + 'static>(self, stage: T) -> Self {
        Self {
            pipeline: self.pipeline.push(stage),
            ..self
        }
    }

    pub fn build(self) -> Profile<DynamicProcess> {
        Profile {
            name: self.name,
            pipeline: self.pipeline,
        }
    }
}
