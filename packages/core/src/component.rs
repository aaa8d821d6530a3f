//! Component references and the `Component` marker.
//!
//! A [`ComponentRef`] is decided once, when it is made, to be one of four
//! variants. The variant tells [`crate::produce`] whether to instantiate the
//! reference or invoke it; nothing needs to be inspected at call time.
//!
//! | Variant | Made with | Produces |
//! |---|---|---|
//! | intrinsic | [`ComponentRef::intrinsic`] | the element itself |
//! | function | [`ComponentRef::function`] | any [`Value`] |
//! | class | [`ComponentRef::class`] | an [`Instance`] of the class |
//! | factory | [`ComponentRef::factory`] | an [`Instance`] or nothing |

use crate::error::{ElementError, ElementResult};
use crate::props::Props;
use crate::value::Value;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Upcast helper so instances can be downcast to their concrete type
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Marker base type shared by every class component and every instance.
pub trait Component: AsAny + Send + Sync + fmt::Debug {}

/// A component that has to be constructed from its props.
///
/// ```rust,ignore
/// #[derive(Debug)]
/// struct Label { text: String }
///
/// impl Component for Label {}
///
/// impl ClassComponent for Label {
///     fn construct(props: &Props) -> ElementResult<Self> {
///         Ok(Self { text: props.require_str("text")?.to_string() })
///     }
/// }
///
/// let label = ComponentRef::class::<Label>();
/// ```
pub trait ClassComponent: Component + Sized {
    fn construct(props: &Props) -> ElementResult<Self>;

    fn name() -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Intermediate base types between the marker and this class
    fn extends() -> Vec<TypeTag> {
        Vec::new()
    }
}

/// Runtime name of a Rust type
#[derive(Debug, Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Tag of the `Component` marker
    pub fn component() -> Self {
        Self::of::<dyn Component>()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Intrinsic,
    Function,
    Class,
    Factory,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Intrinsic => "intrinsic",
            ComponentKind::Function => "function",
            ComponentKind::Class => "class",
            ComponentKind::Factory => "factory",
        };
        f.write_str(name)
    }
}

type RenderFn = dyn Fn(&Props) -> ElementResult<Value> + Send + Sync;
type FactoryFn = dyn Fn(&Props) -> ElementResult<Option<Instance>> + Send + Sync;
type ConstructFn = fn(&Props) -> ElementResult<Instance>;

#[derive(Clone)]
pub struct FunctionRef {
    name: Arc<str>,
    render: Arc<RenderFn>,
}

#[derive(Clone)]
pub struct ClassRef {
    tag: TypeTag,
    name: &'static str,
    lineage: Arc<[TypeTag]>,
    construct: ConstructFn,
}

#[derive(Clone)]
pub struct FactoryRef {
    name: Arc<str>,
    factory: Arc<FactoryFn>,
}

impl ClassRef {
    pub fn type_tag(&self) -> TypeTag {
        self.tag
    }

    /// The marker followed by any declared intermediate bases
    pub fn lineage(&self) -> &[TypeTag] {
        &self.lineage
    }
}

/// Reference to something an element can be built from
#[derive(Clone)]
pub enum ComponentRef {
    Intrinsic(Arc<str>),
    Function(FunctionRef),
    Class(ClassRef),
    Factory(FactoryRef),
}

impl ComponentRef {
    pub fn intrinsic(tag: impl Into<Arc<str>>) -> Self {
        ComponentRef::Intrinsic(tag.into())
    }

    pub fn function<F>(name: impl Into<Arc<str>>, render: F) -> Self
    where
        F: Fn(&Props) -> ElementResult<Value> + Send + Sync + 'static,
    {
        ComponentRef::Function(FunctionRef {
            name: name.into(),
            render: Arc::new(render),
        })
    }

    pub fn class<C: ClassComponent>() -> Self {
        let lineage = std::iter::once(TypeTag::component())
            .chain(C::extends())
            .collect();

        ComponentRef::Class(ClassRef {
            tag: TypeTag::of::<C>(),
            name: C::name(),
            lineage,
            construct: construct_instance::<C>,
        })
    }

    pub fn factory<F>(name: impl Into<Arc<str>>, factory: F) -> Self
    where
        F: Fn(&Props) -> ElementResult<Option<Instance>> + Send + Sync + 'static,
    {
        ComponentRef::Factory(FactoryRef {
            name: name.into(),
            factory: Arc::new(factory),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            ComponentRef::Intrinsic(tag) => tag,
            ComponentRef::Function(function) => &function.name,
            ComponentRef::Class(class) => class.name,
            ComponentRef::Factory(factory) => &factory.name,
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentRef::Intrinsic(_) => ComponentKind::Intrinsic,
            ComponentRef::Function(_) => ComponentKind::Function,
            ComponentRef::Class(_) => ComponentKind::Class,
            ComponentRef::Factory(_) => ComponentKind::Factory,
        }
    }

    /// Invoke a function or factory component directly.
    ///
    /// Factories that produce nothing yield [`Value::Null`].
    pub fn call(&self, props: &Props) -> ElementResult<Value> {
        match self {
            ComponentRef::Function(function) => (function.render)(props),
            ComponentRef::Factory(factory) => Ok((factory.factory)(props)?.into()),
            ComponentRef::Class(class) => Err(ElementError::malformed(
                class.name,
                "class components must be instantiated, not called",
            )),
            ComponentRef::Intrinsic(tag) => Err(ElementError::malformed(
                tag.to_string(),
                "intrinsic elements cannot be called",
            )),
        }
    }

    pub fn instantiate(&self, props: &Props) -> ElementResult<Instance> {
        match self {
            ComponentRef::Class(class) => (class.construct)(props),
            other => Err(ElementError::malformed(
                other.name(),
                format!("{} components are not constructible", other.kind()),
            )),
        }
    }
}

fn construct_instance<C: ClassComponent>(props: &Props) -> ElementResult<Instance> {
    C::construct(props).map(Instance::new)
}

impl PartialEq for ComponentRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ComponentRef::Intrinsic(a), ComponentRef::Intrinsic(b)) => a == b,
            (ComponentRef::Function(a), ComponentRef::Function(b)) => Arc::ptr_eq(&a.render, &b.render),
            (ComponentRef::Class(a), ComponentRef::Class(b)) => a.tag == b.tag,
            (ComponentRef::Factory(a), ComponentRef::Factory(b)) => Arc::ptr_eq(&a.factory, &b.factory),
            _ => false,
        }
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self {
            ComponentRef::Intrinsic(_) => "Intrinsic",
            ComponentRef::Function(_) => "Function",
            ComponentRef::Class(_) => "Class",
            ComponentRef::Factory(_) => "Factory",
        };
        f.debug_tuple(variant).field(&self.name()).finish()
    }
}

impl From<&str> for ComponentRef {
    fn from(tag: &str) -> Self {
        ComponentRef::intrinsic(tag)
    }
}

impl From<&ComponentRef> for ComponentRef {
    fn from(component: &ComponentRef) -> Self {
        component.clone()
    }
}

/// A constructed class component, shared and immutable
#[derive(Clone)]
pub struct Instance {
    component: Arc<dyn Component>,
    tag: TypeTag,
}

impl Instance {
    pub fn new<C: Component>(component: C) -> Self {
        Self {
            component: Arc::new(component),
            tag: TypeTag::of::<C>(),
        }
    }

    pub fn type_tag(&self) -> TypeTag {
        self.tag
    }

    pub fn type_name(&self) -> &'static str {
        short_type_name(self.tag.name())
    }

    pub fn is<C: Component>(&self) -> bool {
        self.tag == TypeTag::of::<C>()
    }

    pub fn downcast_ref<C: Component>(&self) -> Option<&C> {
        // Go through the trait object; calling on the Arc would upcast the Arc itself
        let component: &dyn Component = &*self.component;
        component.as_any().downcast_ref::<C>()
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.component, &other.component)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.component, f)
    }
}

impl Serialize for Instance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Instance", 1)?;
        state.serialize_field("instance", self.type_name())?;
        state.end()
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
