/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use serde::Deserialize;

const IDENTIFIER_KEY_SERVICE_TAG: &str = "ServiceTag";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct IdentifierType {
    pub(super) label: String,
    pub(super) key: String,
}

/// One element of the `otherIdentifyingInfo` list of a host.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(super) struct HostIdentificationInfo {
    pub(super) identifier_value: String,
    pub(super) identifier_type: IdentifierType,
}

impl HostIdentificationInfo {
    pub(super) fn service_tag(&self) -> Option<&str> {
        if self.identifier_type.key == IDENTIFIER_KEY_SERVICE_TAG {
            Some(self.identifier_value.as_str())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::decode_list;

    #[test]
    fn service_tag() {
        let xml = "<HostSystemIdentificationInfo>\
                     <identifierValue>ABC1234</identifierValue>\
                     <identifierType>\
                       <label>Service tag</label>\
                       <summary>Service tag of the system</summary>\
                       <key>ServiceTag</key>\
                     </identifierType>\
                   </HostSystemIdentificationInfo>\
                   <HostSystemIdentificationInfo>\
                     <identifierValue>0</identifierValue>\
                     <identifierType>\
                       <label>Asset Tag</label>\
                       <key>AssetTag</key>\
                     </identifierType>\
                   </HostSystemIdentificationInfo>";
        let infos: Vec<HostIdentificationInfo> = decode_list(xml).unwrap();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].identifier_type.label, "Service tag");
        assert_eq!(infos[0].service_tag(), Some("ABC1234"));
        assert_eq!(infos[1].identifier_type.key, "AssetTag");
        assert_eq!(infos[1].service_tag(), None);
    }
}
