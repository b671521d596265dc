// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gpiosysfs::Sysfs;
use gpiosysfs_sim::Sim;

// the sysfs rooted at the simulated tree
pub fn sysfs(sim: &Sim) -> Sysfs {
    Sysfs::new(sim.root())
}
