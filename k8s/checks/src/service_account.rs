// Copyright (c) Microsoft. All rights reserved.

use k8s_errors::Error;
use k8s_openapi::api::core::v1::ServiceAccount;
use log::debug;

/// Name of the token secret provisioned for the service account.
///
/// The token is only considered provisioned once the account references
/// exactly one named secret.
pub fn service_account_token_secret(service_account: &ServiceAccount) -> Result<String, Error> {
    let name = service_account.metadata.name.clone().unwrap_or_default();

    let secrets = service_account.secrets.as_deref().unwrap_or_default();
    debug!(
        "ServiceAccount {} references {} secrets",
        name,
        secrets.len()
    );

    match secrets {
        [secret] => secret
            .name
            .clone()
            .ok_or_else(|| Error::service_account_token_not_available(name)),
        _ => Err(Error::service_account_token_not_available(name)),
    }
}
