//! Array requirement flags and per-dtype flags.
//!
//! Bit values match the native engine's encodings so flag sets can be handed
//! across the boundary unchanged.

use bitflags::bitflags;

use crate::tag::ElementTypeCode;

bitflags! {
    /// Layout and behavior requirements for an array.
    ///
    /// An array never reports `FORCECAST`, `ENSURECOPY`, `ENSUREARRAY`, or
    /// `ELEMENTSTRIDES`; those are only requests to array constructors.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ArrayFlags: u32 {
        /// Row-major contiguous (last index varies fastest).
        const CONTIGUOUS = 0x0001;
        /// Column-major contiguous (first index varies fastest).
        const FORTRAN = 0x0002;
        /// The array owns its data buffer.
        const OWNDATA = 0x0004;
        /// Cast regardless of safety.
        const FORCECAST = 0x0010;
        /// Always copy. The result is contiguous, aligned, and writeable.
        const ENSURECOPY = 0x0020;
        /// Result must be a base-class array.
        const ENSUREARRAY = 0x0040;
        /// Strides in units of the element size.
        const ELEMENTSTRIDES = 0x0080;
        /// Data aligned for the element type.
        const ALIGNED = 0x0100;
        /// Data in native byte order.
        const NOTSWAPPED = 0x0200;
        const WRITEABLE = 0x0400;
        /// Array-interface descriptor present.
        const ARR_HAS_DESCR = 0x0800;
        /// Copy back into the base array on deallocation.
        const UPDATEIFCOPY = 0x1000;

        const BEHAVED = Self::ALIGNED.bits() | Self::WRITEABLE.bits();
        const BEHAVED_NS = Self::BEHAVED.bits() | Self::NOTSWAPPED.bits();
        const CARRAY = Self::CONTIGUOUS.bits() | Self::BEHAVED.bits();
        const CARRAY_RO = Self::CONTIGUOUS.bits() | Self::ALIGNED.bits();
        const FARRAY = Self::FORTRAN.bits() | Self::BEHAVED.bits();
        const FARRAY_RO = Self::FORTRAN.bits() | Self::ALIGNED.bits();
        const DEFAULT = Self::CARRAY.bits();
        const IN_ARRAY = Self::CARRAY_RO.bits();
        const OUT_ARRAY = Self::CARRAY.bits();
        const INOUT_ARRAY = Self::CARRAY.bits() | Self::UPDATEIFCOPY.bits();
        const UPDATE_ALL = Self::CONTIGUOUS.bits() | Self::FORTRAN.bits() | Self::ALIGNED.bits();
    }
}

bitflags! {
    /// Per-dtype storage properties.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DtypeFlags: u32 {
        /// Items must be reference counted on insert and extract.
        const ITEM_REFCOUNT = 0x01;
        /// Convert to a list when pickling.
        const LIST_PICKLE = 0x02;
        /// Each item is a pointer.
        const ITEM_IS_POINTER = 0x04;
        /// Memory must be initialized for this type.
        const NEEDS_INIT = 0x08;
        /// Operations need the host runtime; the engine cannot release it.
        const NEEDS_PYAPI = 0x10;
        /// Extract items through the type's getter.
        const USE_GETITEM = 0x20;
        /// Build 0-d arrays through the type's setter.
        const USE_SETITEM = 0x40;

        /// Flags a structured type inherits from any of its fields.
        const FROM_FIELDS = Self::NEEDS_INIT.bits()
            | Self::LIST_PICKLE.bits()
            | Self::ITEM_REFCOUNT.bits()
            | Self::NEEDS_PYAPI.bits();
        const OBJECT_DTYPE_FLAGS = Self::LIST_PICKLE.bits()
            | Self::USE_GETITEM.bits()
            | Self::ITEM_IS_POINTER.bits()
            | Self::ITEM_REFCOUNT.bits()
            | Self::NEEDS_INIT.bits()
            | Self::NEEDS_PYAPI.bits();
    }
}

impl DtypeFlags {
    /// Storage flags of a builtin element type.
    pub const fn for_code(code: ElementTypeCode) -> Self {
        match code {
            ElementTypeCode::Object => Self::OBJECT_DTYPE_FLAGS,
            _ => Self::empty(),
        }
    }
}
