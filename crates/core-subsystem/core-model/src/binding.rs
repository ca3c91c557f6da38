// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Style {
    #[default]
    Document,
    Rpc,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WrapperStyle {
    #[default]
    Wrapped,
    Bare,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoapVersion {
    #[serde(rename = "1.1")]
    Soap11,
    #[serde(rename = "1.2")]
    Soap12,
}

impl SoapVersion {
    /// The action used when none is declared: SOAP 1.1 always sends the (possibly empty)
    /// `SOAPAction` header, SOAP 1.2 omits the `action` parameter.
    pub fn default_action(&self) -> Option<String> {
        match self {
            SoapVersion::Soap11 => Some(String::new()),
            SoapVersion::Soap12 => None,
        }
    }
}

/// Resolved style of one operation. Computed once and never mutated afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BindingStyleDirective {
    pub style: Style,
    pub wrapper_style: WrapperStyle,
    pub action: Option<String>,
    pub soap_version: SoapVersion,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported binding id '{0}'")]
pub struct UnsupportedBindingId(pub String);

/// The protocol/transport variant a port is bound to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BindingId {
    #[default]
    Soap11Http,
    Soap11HttpMtom,
    Soap12Http,
    Soap12HttpMtom,
}

const SOAP11_HTTP: &str = "http://schemas.xmlsoap.org/wsdl/soap/http";
const SOAP12_HTTP: &str = "http://www.w3.org/2003/05/soap/bindings/HTTP/";
const MTOM_SUFFIX: &str = "?mtom=true";

impl BindingId {
    pub fn soap_version(&self) -> SoapVersion {
        match self {
            BindingId::Soap11Http | BindingId::Soap11HttpMtom => SoapVersion::Soap11,
            BindingId::Soap12Http | BindingId::Soap12HttpMtom => SoapVersion::Soap12,
        }
    }

    pub fn uri(&self) -> String {
        let (base, mtom) = match self {
            BindingId::Soap11Http => (SOAP11_HTTP, false),
            BindingId::Soap11HttpMtom => (SOAP11_HTTP, true),
            BindingId::Soap12Http => (SOAP12_HTTP, false),
            BindingId::Soap12HttpMtom => (SOAP12_HTTP, true),
        };

        if mtom {
            format!("{base}{MTOM_SUFFIX}")
        } else {
            base.to_string()
        }
    }
}

impl Display for BindingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uri())
    }
}

impl FromStr for BindingId {
    type Err = UnsupportedBindingId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, mtom) = match s.strip_suffix(MTOM_SUFFIX) {
            Some(base) => (base, true),
            None => (s, false),
        };

        match (base, mtom) {
            (SOAP11_HTTP | "soap11", false) => Ok(BindingId::Soap11Http),
            (SOAP11_HTTP | "soap11", true) => Ok(BindingId::Soap11HttpMtom),
            (SOAP12_HTTP | "soap12", false) => Ok(BindingId::Soap12Http),
            (SOAP12_HTTP | "soap12", true) => Ok(BindingId::Soap12HttpMtom),
            _ => Err(UnsupportedBindingId(s.to_string())),
        }
    }
}
