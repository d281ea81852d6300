//! Consumer configuration.

use std::fmt;

use serde::Serialize;

use crate::config::{parse_value, ClientConfig};
use crate::constants::*;
use crate::consumer::{
    default_push_fetch_thread_count, normalize_consume_model, normalize_push_fetch_thread_count,
    ConsumeModel,
};
use crate::error::{ClientError, ClientResult};
use crate::log::{debug, trace, warn};
use crate::master::MasterInfo;
use crate::util::{is_blank, is_identifier};

/// Configuration of a consumer.
///
/// The consumer group is validated once, at construction, and cannot be
/// changed afterwards. All other settings have defaults and can be tuned
/// before the configuration is handed to the consumer runtime. Only the
/// consume model and the push fetch thread count are normalized by their
/// setters; every other value is stored as given.
///
/// The field order below is the order of the diagnostic output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConsumerConfig {
    #[serde(rename = "consumerGroup")]
    consumer_group: String,
    #[serde(rename = "maxSubInfoReportIntvlTimes")]
    max_sub_info_report_interval_times: i32,
    #[serde(rename = "consumeModel")]
    consume_model: i32,
    #[serde(rename = "msgNotFoundWaitPeriodMs")]
    msg_not_found_wait_period_ms: i64,
    #[serde(rename = "shutDownRebalanceWaitPeriodMs")]
    shutdown_rebalance_wait_period_ms: i64,
    #[serde(rename = "pushFetchThreadCnt")]
    push_fetch_thread_count: i32,
    #[serde(rename = "pushListenerWaitTimeoutRollBack")]
    push_listener_wait_timeout_rollback: bool,
    #[serde(rename = "pushListenerThrowedRollBack")]
    push_listener_throwed_rollback: bool,
    #[serde(rename = "pushListenerWaitPeriodMs")]
    push_listener_wait_period_ms: i64,
    #[serde(rename = "pullRebConfirmTimeoutRollBack")]
    pull_reb_confirm_timeout_rollback: bool,
    #[serde(rename = "pullConfirmWaitPeriodMs")]
    pull_reb_confirm_wait_period_ms: i64,
    #[serde(rename = "pullProtectConfirmTimeoutPeriodMs")]
    pull_protect_confirm_timeout_ms: i64,
    #[serde(rename = "pullConfirmInLocal")]
    pull_confirm_in_local: bool,
    #[serde(rename = "ClientConfig")]
    client_config: ClientConfig,
}

impl ConsumerConfig {
    /// Creates a consumer configuration, resolving the master cluster from a
    /// comma-separated `host:port` list.
    pub fn new(
        local_host: &str,
        master_addr_info: &str,
        consumer_group: &str,
    ) -> ClientResult<ConsumerConfig> {
        let client_config = ClientConfig::new(local_host, master_addr_info)?;
        ConsumerConfig::from_client_config(client_config, consumer_group)
    }

    /// Creates a consumer configuration from a resolved master descriptor.
    pub fn with_master_info(
        local_host: &str,
        master_info: MasterInfo,
        consumer_group: &str,
    ) -> ClientResult<ConsumerConfig> {
        let client_config = ClientConfig::with_master_info(local_host, master_info)?;
        ConsumerConfig::from_client_config(client_config, consumer_group)
    }

    fn from_client_config(
        client_config: ClientConfig,
        consumer_group: &str,
    ) -> ClientResult<ConsumerConfig> {
        let consumer_group = validate_group_name(consumer_group).map_err(|e| {
            warn!("Rejected consumer group {:?}: {}", consumer_group, e);
            e
        })?;
        debug!("Created consumer config for group {}", consumer_group);
        Ok(ConsumerConfig {
            consumer_group: consumer_group.to_string(),
            max_sub_info_report_interval_times: MAX_SUBSCRIBE_REPORT_INTERVAL_TIMES,
            consume_model: DEFAULT_CONSUME_MODEL,
            msg_not_found_wait_period_ms: DEFAULT_MSG_NOT_FOUND_WAIT_PERIOD_MS,
            shutdown_rebalance_wait_period_ms: DEFAULT_SHUTDOWN_REBALANCE_WAIT_PERIOD_MS,
            push_fetch_thread_count: default_push_fetch_thread_count(),
            push_listener_wait_timeout_rollback: true,
            push_listener_throwed_rollback: false,
            push_listener_wait_period_ms: DEFAULT_PUSH_LISTENER_WAIT_PERIOD_MS,
            pull_reb_confirm_timeout_rollback: true,
            pull_reb_confirm_wait_period_ms: DEFAULT_PULL_REB_CONFIRM_WAIT_PERIOD_MS,
            pull_protect_confirm_timeout_ms: DEFAULT_PULL_PROTECT_CONFIRM_WAIT_PERIOD_MS,
            pull_confirm_in_local: false,
            client_config,
        })
    }

    /// Returns the trimmed consumer group name.
    pub fn consumer_group(&self) -> &str {
        &self.consumer_group
    }

    /// Returns the embedded base client configuration.
    pub fn client_config(&self) -> &ClientConfig {
        &self.client_config
    }

    /// Returns the embedded base client configuration for tuning.
    pub fn client_config_mut(&mut self) -> &mut ClientConfig {
        &mut self.client_config
    }

    /// Returns the raw consume model: -1, 0 or 1.
    pub fn consume_model(&self) -> i32 {
        self.consume_model
    }

    /// Returns the consume model as a typed value.
    pub fn consume_model_kind(&self) -> ConsumeModel {
        ConsumeModel::from_raw(self.consume_model)
    }

    /// Sets the consume model. Any positive value is stored as 1, any
    /// negative value as -1.
    pub fn set_consume_model(&mut self, consume_model: i32) -> &mut ConsumerConfig {
        let normalized = normalize_consume_model(consume_model);
        if normalized != consume_model {
            debug!("consumeModel {} normalized to {}", consume_model, normalized);
        }
        self.consume_model = normalized;
        self
    }

    pub fn max_sub_info_report_interval_times(&self) -> i32 {
        self.max_sub_info_report_interval_times
    }

    pub fn set_max_sub_info_report_interval_times(&mut self, times: i32) -> &mut ConsumerConfig {
        self.max_sub_info_report_interval_times = times;
        self
    }

    pub fn msg_not_found_wait_period_ms(&self) -> i64 {
        self.msg_not_found_wait_period_ms
    }

    pub fn set_msg_not_found_wait_period_ms(&mut self, period_ms: i64) -> &mut ConsumerConfig {
        self.msg_not_found_wait_period_ms = period_ms;
        self
    }

    pub fn shutdown_rebalance_wait_period_ms(&self) -> i64 {
        self.shutdown_rebalance_wait_period_ms
    }

    pub fn set_shutdown_rebalance_wait_period_ms(&mut self, period_ms: i64) -> &mut ConsumerConfig {
        self.shutdown_rebalance_wait_period_ms = period_ms;
        self
    }

    pub fn push_fetch_thread_count(&self) -> i32 {
        self.push_fetch_thread_count
    }

    /// Sets the number of push fetch threads. A value of zero or less is
    /// replaced by [`default_push_fetch_thread_count`].
    pub fn set_push_fetch_thread_count(&mut self, thread_count: i32) -> &mut ConsumerConfig {
        let normalized = normalize_push_fetch_thread_count(thread_count);
        if normalized != thread_count {
            debug!(
                "pushFetchThreadCnt {} replaced by default {}",
                thread_count, normalized
            );
        }
        self.push_fetch_thread_count = normalized;
        self
    }

    pub fn push_listener_wait_timeout_rollback(&self) -> bool {
        self.push_listener_wait_timeout_rollback
    }

    pub fn set_push_listener_wait_timeout_rollback(&mut self, rollback: bool) -> &mut ConsumerConfig {
        self.push_listener_wait_timeout_rollback = rollback;
        self
    }

    pub fn push_listener_throwed_rollback(&self) -> bool {
        self.push_listener_throwed_rollback
    }

    pub fn set_push_listener_throwed_rollback(&mut self, rollback: bool) -> &mut ConsumerConfig {
        self.push_listener_throwed_rollback = rollback;
        self
    }

    pub fn push_listener_wait_period_ms(&self) -> i64 {
        self.push_listener_wait_period_ms
    }

    pub fn set_push_listener_wait_period_ms(&mut self, period_ms: i64) -> &mut ConsumerConfig {
        self.push_listener_wait_period_ms = period_ms;
        self
    }

    pub fn pull_reb_confirm_timeout_rollback(&self) -> bool {
        self.pull_reb_confirm_timeout_rollback
    }

    pub fn set_pull_reb_confirm_timeout_rollback(&mut self, rollback: bool) -> &mut ConsumerConfig {
        self.pull_reb_confirm_timeout_rollback = rollback;
        self
    }

    pub fn pull_reb_confirm_wait_period_ms(&self) -> i64 {
        self.pull_reb_confirm_wait_period_ms
    }

    pub fn set_pull_reb_confirm_wait_period_ms(&mut self, period_ms: i64) -> &mut ConsumerConfig {
        self.pull_reb_confirm_wait_period_ms = period_ms;
        self
    }

    pub fn pull_protect_confirm_timeout_ms(&self) -> i64 {
        self.pull_protect_confirm_timeout_ms
    }

    pub fn set_pull_protect_confirm_timeout_ms(&mut self, timeout_ms: i64) -> &mut ConsumerConfig {
        self.pull_protect_confirm_timeout_ms = timeout_ms;
        self
    }

    pub fn pull_confirm_in_local(&self) -> bool {
        self.pull_confirm_in_local
    }

    pub fn set_pull_confirm_in_local(&mut self, in_local: bool) -> &mut ConsumerConfig {
        self.pull_confirm_in_local = in_local;
        self
    }

    /// Sets a parameter by its diagnostic name, e.g. `"consumeModel"`.
    ///
    /// Names that are not consumer settings are forwarded to the embedded
    /// [`ClientConfig`]. `consumerGroup` is fixed at construction.
    pub fn set(&mut self, key: &str, value: &str) -> ClientResult<&mut ConsumerConfig> {
        trace!("Setting consumer property {} = {}", key, value);
        match key {
            "consumeModel" => {
                self.set_consume_model(parse_value(key, value)?);
            }
            "maxSubInfoReportIntvlTimes" => {
                self.set_max_sub_info_report_interval_times(parse_value(key, value)?);
            }
            "msgNotFoundWaitPeriodMs" => {
                self.set_msg_not_found_wait_period_ms(parse_value(key, value)?);
            }
            "shutDownRebalanceWaitPeriodMs" => {
                self.set_shutdown_rebalance_wait_period_ms(parse_value(key, value)?);
            }
            "pushFetchThreadCnt" => {
                self.set_push_fetch_thread_count(parse_value(key, value)?);
            }
            "pushListenerWaitTimeoutRollBack" => {
                self.set_push_listener_wait_timeout_rollback(parse_value(key, value)?);
            }
            "pushListenerThrowedRollBack" => {
                self.set_push_listener_throwed_rollback(parse_value(key, value)?);
            }
            "pushListenerWaitPeriodMs" => {
                self.set_push_listener_wait_period_ms(parse_value(key, value)?);
            }
            "pullRebConfirmTimeoutRollBack" => {
                self.set_pull_reb_confirm_timeout_rollback(parse_value(key, value)?);
            }
            "pullConfirmWaitPeriodMs" => {
                self.set_pull_reb_confirm_wait_period_ms(parse_value(key, value)?);
            }
            "pullProtectConfirmTimeoutPeriodMs" => {
                self.set_pull_protect_confirm_timeout_ms(parse_value(key, value)?);
            }
            "pullConfirmInLocal" => {
                self.set_pull_confirm_in_local(parse_value(key, value)?);
            }
            "consumerGroup" => {
                return Err(ClientError::invalid_value(
                    key,
                    value,
                    "fixed at construction",
                ));
            }
            _ => {
                self.client_config.set(key, value)?;
            }
        }
        Ok(self)
    }

    /// Applies every `(key, value)` pair with [`ConsumerConfig::set`],
    /// stopping at the first failure.
    pub fn set_all<I, K, V>(&mut self, properties: I) -> ClientResult<&mut ConsumerConfig>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in properties {
            self.set(key.as_ref(), value.as_ref())?;
        }
        Ok(self)
    }

    /// Returns the diagnostic representation used in logs.
    ///
    /// The output is an object literal keyed `"ConsumerConfig"` holding every
    /// consumer field followed by the base configuration under
    /// `"ClientConfig"`. It is meant for humans and log scraping only.
    pub fn to_diagnostic_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConsumerConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "\"ConsumerConfig\":{}", json)
    }
}

/// Checks a consumer group name and returns it trimmed.
///
/// The trimmed name must not be blank, must be at most
/// [`MAX_GROUP_NAME_LENGTH`] characters long, and must start with a letter
/// followed only by letters, digits, hyphens or underscores.
///
/// Trimming follows [`str::trim`]: Unicode whitespace such as U+2003 is
/// stripped, while ASCII control characters such as U+0001 are kept and then
/// fail the letter rule.
pub fn validate_group_name(consumer_group: &str) -> ClientResult<&str> {
    if is_blank(consumer_group) {
        return Err(ClientError::invalid_argument("consumerGroup is blank"));
    }
    let consumer_group = consumer_group.trim();
    if consumer_group.chars().count() > MAX_GROUP_NAME_LENGTH {
        return Err(ClientError::invalid_argument(format!(
            "the max length of consumerGroup is {} characters",
            MAX_GROUP_NAME_LENGTH
        )));
    }
    if !is_identifier(consumer_group) {
        return Err(ClientError::invalid_argument(
            "the value of consumerGroup must begin with a letter, \
             can only contain characters, numbers, hyphen, and underscores",
        ));
    }
    Ok(consumer_group)
}
