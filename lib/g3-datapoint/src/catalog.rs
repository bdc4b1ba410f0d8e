/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

//! Metric names shared by all collectors, with their descriptions.

pub const OS_CPU: &str = "os.cpu";
pub const OS_DISK_FREE: &str = "os.disk.fs.space_free";
pub const OS_DISK_PCT_FREE: &str = "os.disk.fs.percent_free";
pub const OS_DISK_TOTAL: &str = "os.disk.fs.space_total";
pub const OS_DISK_USED: &str = "os.disk.fs.space_used";
pub const OS_MEM_FREE: &str = "os.mem.free";
pub const OS_MEM_PCT_FREE: &str = "os.mem.percent_free";
pub const OS_MEM_TOTAL: &str = "os.mem.total";
pub const OS_MEM_USED: &str = "os.mem.used";
pub const OS_NET_BROADCAST: &str = "os.net.packets_broadcast";
pub const OS_NET_BYTES: &str = "os.net.bytes";
pub const OS_NET_DROPPED: &str = "os.net.dropped";
pub const OS_NET_ERRORS: &str = "os.net.errs";
pub const OS_NET_MULTICAST: &str = "os.net.packets_multicast";
pub const OS_NET_PACKETS: &str = "os.net.packets";
pub const OS_NET_UNICAST: &str = "os.net.packets_unicast";
pub const OS_SYSTEM_UPTIME: &str = "os.system.uptime";

pub const OS_DISK_FREE_DESC: &str =
    "The space_free property indicates in bytes how much free space is available on the disk.";
pub const OS_DISK_PCT_FREE_DESC: &str =
    "The percent_free property indicates what percentage of the disk is available.";
pub const OS_DISK_TOTAL_DESC: &str =
    "The space_total property indicates in bytes how much total space is on the disk.";
pub const OS_DISK_USED_DESC: &str =
    "The space_used property indicates in bytes how much space is used on the disk.";
pub const OS_MEM_FREE_DESC: &str =
    "Number, in bytes, of physical memory currently unused and available.";
pub const OS_MEM_PCT_FREE_DESC: &str =
    "The percent of free memory. In Linux free memory includes memory used by buffers and cache.";
pub const OS_MEM_USED_DESC: &str =
    "The amount of used memory. In Linux this excludes memory used by buffers and cache.";
pub const OS_NET_BYTES_DESC: &str =
    "The rate at which bytes are sent or received over each network adapter.";
pub const OS_NET_DROPPED_DESC: &str = "The number of packets that were chosen to be discarded even though no errors had been detected to prevent transmission.";
pub const OS_NET_ERRORS_DESC: &str =
    "The number of packets that could not be transmitted because of errors.";
pub const OS_NET_PACKETS_DESC: &str =
    "The rate at which packets are sent or received on the network interface.";
pub const OS_SYSTEM_UPTIME_DESC: &str = "Seconds since last reboot.";
