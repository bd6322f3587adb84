//! First-boot script delivered to a new droplet as user-data
//!
//! The script runs once under cloud-init, outside of Launchpad's control.
//! It prepares the host for later `launchpad deploy` runs: runtime, reverse
//! proxy, certificate tool, an unprivileged deploy account and a firewall.

use std::net::Ipv4Addr;

/// Who may reach port 22 once the firewall is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SshAccess {
    /// `ufw allow OpenSSH`
    Anywhere,
    /// `ufw allow from <ip> to any port 22 proto tcp`
    OnlyFrom(Ipv4Addr),
}

/// Inputs for rendering the bootstrap script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapSpec {
    pub node_major: u16,
    pub deploy_user: String,
    pub deploy_path: String,
    pub repository: Option<String>,
    pub ssh_access: SshAccess,
}

/// Rendered user-data script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapScript(String);

impl BootstrapScript {
    pub fn render(spec: &BootstrapSpec) -> Self {
        let user = &spec.deploy_user;
        let mut s = String::from("#!/bin/bash\n");

        s.push_str("# Update system\n");
        s.push_str("apt-get update\n");
        s.push_str("apt-get upgrade -y\n\n");

        s.push_str(&format!("# Install Node.js {}\n", spec.node_major));
        s.push_str(&format!(
            "curl -fsSL https://deb.nodesource.com/setup_{}.x | bash -\n",
            spec.node_major
        ));
        s.push_str("apt-get install -y nodejs\n\n");

        s.push_str("# Install nginx, certbot and git\n");
        s.push_str("apt-get install -y nginx\n");
        s.push_str("apt-get install -y certbot python3-certbot-nginx\n");
        s.push_str("apt-get install -y git\n\n");

        s.push_str("# Create deploy user\n");
        s.push_str(&format!("useradd -m -s /bin/bash {}\n", user));
        s.push_str(&format!("mkdir -p /home/{}/.ssh\n", user));
        s.push_str(&format!("chmod 700 /home/{}/.ssh\n", user));
        s.push_str(&format!("chown {0}:{0} /home/{0}/.ssh\n\n", user));

        s.push_str("# Passwordless sudo for service restarts and certificates only\n");
        s.push_str(&format!(
            "echo \"{} ALL=(ALL) NOPASSWD: /usr/bin/certbot, /usr/bin/systemctl\" > /etc/sudoers.d/{}\n",
            user, user
        ));
        s.push_str(&format!("chmod 440 /etc/sudoers.d/{}\n\n", user));

        if let Some(repo) = &spec.repository {
            s.push_str("# Check out the application\n");
            s.push_str(&format!(
                "sudo -u {} git clone {} {}\n\n",
                user,
                shell_quote(repo),
                shell_quote(&spec.deploy_path)
            ));
        }

        s.push_str("# Set up firewall\n");
        match spec.ssh_access {
            SshAccess::Anywhere => s.push_str("ufw allow OpenSSH\n"),
            SshAccess::OnlyFrom(ip) => {
                s.push_str(&format!("ufw allow from {} to any port 22 proto tcp\n", ip))
            }
        }
        s.push_str("ufw allow 'Nginx Full'\n");
        s.push_str("ufw --force enable\n");

        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Single-quote a value for POSIX sh
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}
