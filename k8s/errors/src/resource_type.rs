// Copyright (c) Microsoft. All rights reserved.

use crate::Error;

/// Kinds of Kubernetes resources the helpers know how to address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::Display)]
#[repr(i32)]
pub enum KubeResourceType {
    #[strum(serialize = "pod")]
    Pod = 0,
    #[strum(serialize = "svc")]
    Service = 1,
}

impl KubeResourceType {
    #[must_use]
    pub fn id(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for KubeResourceType {
    type Error = Error;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(KubeResourceType::Pod),
            1 => Ok(KubeResourceType::Service),
            _ => Err(Error::unknown_kube_resource_type(id)),
        }
    }
}
