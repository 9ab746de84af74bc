use super::Type;

/// Static description of a field-less enum, emitted by `#[derive(Enum)]`.
#[derive(Debug)]
pub struct EnumDef {
    /// Fully qualified path, unique per enum type
    pub name: &'static str,

    /// The enum's identifier, used in messages
    pub ident: &'static str,

    /// Integral representation the discriminants are stored as
    pub repr: Type,

    /// Declared members in declaration order
    pub variants: &'static [EnumVariant],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumVariant {
    pub name: &'static str,
    pub discriminant: i64,
}

impl EnumDef {
    pub fn variant_by_discriminant(&self, discriminant: i64) -> Option<&EnumVariant> {
        self.variants
            .iter()
            .find(|variant| variant.discriminant == discriminant)
    }
}

impl PartialEq for EnumDef {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other) || self.name == other.name
    }
}
