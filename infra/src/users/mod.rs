//! Remote user service client.

mod remote;

pub use remote::RemoteCredentialVerifier;
