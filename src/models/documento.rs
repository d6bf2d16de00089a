// src/models/documento.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    common::error::AppError,
    validators::documento::{
        format_cnpj, format_cpf, only_digits, validate_cnpj, validate_cpf, CNPJ_LEN, CPF_LEN,
    },
};

// --- ENUMS ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TipoDocumento {
    Cpf,
    Cnpj,
}

// --- CPF ---

/// CPF com dígitos verificadores conferidos. Guarda só os 11 dígitos.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        if !validate_cpf(input) {
            return Err(AppError::InvalidCpf);
        }
        Ok(Self(only_digits(input)))
    }

    pub fn digits(&self) -> &str {
        &self.0
    }

    pub fn formatted(&self) -> String {
        format_cpf(&self.0)
    }
}

// --- CNPJ ---

/// CNPJ com dígitos verificadores conferidos. Guarda só os 14 dígitos.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnpj(String);

impl Cnpj {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        if !validate_cnpj(input) {
            return Err(AppError::InvalidCnpj);
        }
        Ok(Self(only_digits(input)))
    }

    pub fn digits(&self) -> &str {
        &self.0
    }

    pub fn formatted(&self) -> String {
        format_cnpj(&self.0)
    }
}

// --- DOCUMENTO (CPF ou CNPJ) ---

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tipo", content = "numero", rename_all = "UPPERCASE")]
pub enum Documento {
    Cpf(Cpf),
    Cnpj(Cnpj),
}

impl Documento {
    /// Decide pelo número de dígitos: 11 é CPF, 14 é CNPJ.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        match only_digits(input).len() {
            CPF_LEN => Cpf::parse(input).map(Documento::Cpf),
            CNPJ_LEN => Cnpj::parse(input).map(Documento::Cnpj),
            n => Err(AppError::InvalidDocumento(n)),
        }
    }

    pub fn tipo(&self) -> TipoDocumento {
        match self {
            Documento::Cpf(_) => TipoDocumento::Cpf,
            Documento::Cnpj(_) => TipoDocumento::Cnpj,
        }
    }

    pub fn digits(&self) -> &str {
        match self {
            Documento::Cpf(cpf) => cpf.digits(),
            Documento::Cnpj(cnpj) => cnpj.digits(),
        }
    }
}

// Display = máscara; serde usa a mesma representação.
macro_rules! impl_document_traits {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.formatted())
            }
        }

        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.formatted())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::parse(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

impl_document_traits!(Cpf);
impl_document_traits!(Cnpj);

impl fmt::Display for Documento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Documento::Cpf(cpf) => fmt::Display::fmt(cpf, f),
            Documento::Cnpj(cnpj) => fmt::Display::fmt(cnpj, f),
        }
    }
}

impl FromStr for Documento {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
