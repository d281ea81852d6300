//! Base configuration shared by every client.
//!
//! [`ClientConfig`] carries the local host identity, the master cluster the
//! client registers with, and the RPC and heartbeat tunables. Consumer
//! specific settings live in [`ConsumerConfig`](crate::consumer::ConsumerConfig),
//! which embeds a `ClientConfig`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::constants::*;
use crate::error::{ClientError, ClientResult};
use crate::log::{debug, warn};
use crate::master::MasterInfo;
use crate::util::is_blank;

/// Client configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClientConfig {
    #[serde(rename = "localHostIP")]
    local_host: String,
    #[serde(rename = "masterInfo")]
    master_info: MasterInfo,
    #[serde(rename = "rpcTimeoutMs")]
    rpc_timeout_ms: i64,
    #[serde(rename = "heartbeatPeriodMs")]
    heartbeat_period_ms: i64,
    #[serde(rename = "heartbeatPeriodAfterFail")]
    heartbeat_period_after_fail_ms: i64,
    #[serde(rename = "maxRegisterRetryTimes")]
    max_register_retry_times: i32,
    #[serde(rename = "regFailWaitPeriodMs")]
    reg_fail_wait_period_ms: i64,
    #[serde(rename = "maxHeartBeatRetryTimes")]
    max_heartbeat_retry_times: i32,
    #[serde(rename = "tlsEnable")]
    tls_enable: bool,
    #[serde(rename = "enableUserAuthentic")]
    enable_user_authentication: bool,
    #[serde(rename = "usrName")]
    user_name: String,
}

impl ClientConfig {
    /// Creates a configuration from the local host identity and a
    /// comma-separated list of master addresses.
    pub fn new(local_host: &str, master_addr_info: &str) -> ClientResult<ClientConfig> {
        let master_info = MasterInfo::new(master_addr_info).map_err(|e| {
            warn!("Rejected master address list {:?}: {}", master_addr_info, e);
            e
        })?;
        ClientConfig::with_master_info(local_host, master_info)
    }

    /// Creates a configuration from the local host identity and an already
    /// resolved master descriptor.
    pub fn with_master_info(local_host: &str, master_info: MasterInfo) -> ClientResult<ClientConfig> {
        let local_host = validate_local_host(local_host).map_err(|e| {
            warn!("Rejected local host {:?}: {}", local_host, e);
            e
        })?;
        debug!(
            "Created client config for host {} and master {}",
            local_host, master_info
        );
        Ok(ClientConfig {
            local_host: local_host.to_string(),
            master_info,
            rpc_timeout_ms: DEFAULT_RPC_TIMEOUT_MS,
            heartbeat_period_ms: DEFAULT_HEARTBEAT_PERIOD_MS,
            heartbeat_period_after_fail_ms: DEFAULT_HEARTBEAT_PERIOD_AFTER_FAIL_MS,
            max_register_retry_times: DEFAULT_MAX_REGISTER_RETRY_TIMES,
            reg_fail_wait_period_ms: DEFAULT_REG_FAIL_WAIT_PERIOD_MS,
            max_heartbeat_retry_times: DEFAULT_MAX_HEARTBEAT_RETRY_TIMES,
            tls_enable: false,
            enable_user_authentication: false,
            user_name: String::new(),
        })
    }

    pub fn local_host(&self) -> &str {
        &self.local_host
    }

    pub fn master_info(&self) -> &MasterInfo {
        &self.master_info
    }

    pub fn rpc_timeout_ms(&self) -> i64 {
        self.rpc_timeout_ms
    }

    /// Sets the RPC read/write timeout. Values outside
    /// `[MIN_RPC_TIMEOUT_MS, MAX_RPC_TIMEOUT_MS]` are clamped to the nearest
    /// bound.
    pub fn set_rpc_timeout_ms(&mut self, rpc_timeout_ms: i64) -> &mut ClientConfig {
        let clamped = rpc_timeout_ms.clamp(MIN_RPC_TIMEOUT_MS, MAX_RPC_TIMEOUT_MS);
        if clamped != rpc_timeout_ms {
            debug!("rpcTimeoutMs {} clamped to {}", rpc_timeout_ms, clamped);
        }
        self.rpc_timeout_ms = clamped;
        self
    }

    pub fn heartbeat_period_ms(&self) -> i64 {
        self.heartbeat_period_ms
    }

    pub fn set_heartbeat_period_ms(&mut self, heartbeat_period_ms: i64) -> &mut ClientConfig {
        self.heartbeat_period_ms = heartbeat_period_ms;
        self
    }

    pub fn heartbeat_period_after_fail_ms(&self) -> i64 {
        self.heartbeat_period_after_fail_ms
    }

    pub fn set_heartbeat_period_after_fail_ms(&mut self, period_ms: i64) -> &mut ClientConfig {
        self.heartbeat_period_after_fail_ms = period_ms;
        self
    }

    pub fn max_register_retry_times(&self) -> i32 {
        self.max_register_retry_times
    }

    pub fn set_max_register_retry_times(&mut self, times: i32) -> &mut ClientConfig {
        self.max_register_retry_times = times;
        self
    }

    pub fn reg_fail_wait_period_ms(&self) -> i64 {
        self.reg_fail_wait_period_ms
    }

    pub fn set_reg_fail_wait_period_ms(&mut self, period_ms: i64) -> &mut ClientConfig {
        self.reg_fail_wait_period_ms = period_ms;
        self
    }

    pub fn max_heartbeat_retry_times(&self) -> i32 {
        self.max_heartbeat_retry_times
    }

    pub fn set_max_heartbeat_retry_times(&mut self, times: i32) -> &mut ClientConfig {
        self.max_heartbeat_retry_times = times;
        self
    }

    pub fn tls_enable(&self) -> bool {
        self.tls_enable
    }

    pub fn set_tls_enable(&mut self, tls_enable: bool) -> &mut ClientConfig {
        self.tls_enable = tls_enable;
        self
    }

    pub fn enable_user_authentication(&self) -> bool {
        self.enable_user_authentication
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Enables or disables user authentication. A non-blank user name is
    /// required when enabling.
    pub fn set_user_authentication(
        &mut self,
        enable: bool,
        user_name: &str,
    ) -> ClientResult<&mut ClientConfig> {
        if enable && is_blank(user_name) {
            return Err(ClientError::invalid_argument(
                "usrName is blank while user authentication is enabled",
            ));
        }
        self.enable_user_authentication = enable;
        self.user_name = user_name.trim().to_string();
        Ok(self)
    }

    /// Sets a parameter by its diagnostic name, e.g. `"rpcTimeoutMs"`.
    ///
    /// The value is parsed and passed to the typed setter, so clamping rules
    /// still apply. `localHostIP` and the master address (`masterInfo` or
    /// `masterAddrInfo`) are fixed at construction.
    pub fn set(&mut self, key: &str, value: &str) -> ClientResult<&mut ClientConfig> {
        match key {
            "rpcTimeoutMs" => {
                self.set_rpc_timeout_ms(parse_value(key, value)?);
            }
            "heartbeatPeriodMs" => {
                self.set_heartbeat_period_ms(parse_value(key, value)?);
            }
            "heartbeatPeriodAfterFail" => {
                self.set_heartbeat_period_after_fail_ms(parse_value(key, value)?);
            }
            "maxRegisterRetryTimes" => {
                self.set_max_register_retry_times(parse_value(key, value)?);
            }
            "regFailWaitPeriodMs" => {
                self.set_reg_fail_wait_period_ms(parse_value(key, value)?);
            }
            "maxHeartBeatRetryTimes" => {
                self.set_max_heartbeat_retry_times(parse_value(key, value)?);
            }
            "tlsEnable" => {
                self.set_tls_enable(parse_value(key, value)?);
            }
            "enableUserAuthentic" => {
                let user_name = self.user_name.clone();
                self.set_user_authentication(parse_value(key, value)?, &user_name)
                    .map_err(|e| ClientError::invalid_value(key, value, e))?;
            }
            "usrName" => {
                let enable = self.enable_user_authentication;
                self.set_user_authentication(enable, value)
                    .map_err(|e| ClientError::invalid_value(key, value, e))?;
            }
            "localHostIP" | "masterInfo" | "masterAddrInfo" => {
                return Err(ClientError::invalid_value(
                    key,
                    value,
                    "fixed at construction",
                ));
            }
            _ => return Err(ClientError::UnknownProperty(key.to_string())),
        }
        Ok(self)
    }

    /// Returns the configuration as a JSON object, for diagnostics.
    pub fn to_json_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

fn validate_local_host(local_host: &str) -> ClientResult<&str> {
    if is_blank(local_host) {
        return Err(ClientError::invalid_argument("localHostIP is blank"));
    }
    let local_host = local_host.trim();
    if local_host.contains(char::is_whitespace) {
        return Err(ClientError::invalid_argument(
            "localHostIP must not contain whitespace",
        ));
    }
    Ok(local_host)
}

/// Parses a property value, reporting failures as
/// [`ClientError::InvalidValue`].
pub(crate) fn parse_value<T>(key: &str, value: &str) -> ClientResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ClientError::invalid_value(key, value, e))
}
