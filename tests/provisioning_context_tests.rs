use mageinit::cli::context::ProvisionContext;
use mageinit::params::{
    dev_domain, EnvironmentTarget, Layout, ProvisioningParameters, SourceServer,
};
use std::path::PathBuf;

fn parameters(project: &str, server: SourceServer) -> ProvisioningParameters {
    ProvisioningParameters {
        project: project.to_string(),
        db_host: "192.168.56.101".to_string(),
        db_name: format!("mg_{project}"),
        db_user: "root".to_string(),
        db_password: "root".to_string(),
        server,
    }
}

#[test]
fn clone_url_and_remote_paths_are_templated_from_the_project_name() {
    for project in ["acme", "shop-2", "some_client"] {
        let params = parameters(project, SourceServer::Demo);
        assert_eq!(
            params.clone_url(),
            format!("git@bitbucket.org:medialounge_repo/{project}.git")
        );

        let target = EnvironmentTarget::resolve(SourceServer::Demo);
        assert_eq!(
            target.remote_project_root(project, Layout::Root),
            format!("~/projects/{project}")
        );
    }
}

#[test]
fn demo2_paths_carry_the_httpdocs_prefix() {
    let target = EnvironmentTarget::resolve(SourceServer::Demo2);
    assert_eq!(
        target.remote_project_root("acme", Layout::Root),
        "~/httpdocs/projects/acme"
    );
}

#[test]
fn base_url_and_hosts_entry_agree_on_the_domain() {
    // The same generated domain feeds both the base-URL update and the hosts
    // registration; a mismatch would leave a dead local URL.
    let params = parameters("acme", SourceServer::Demo);
    let target = EnvironmentTarget::resolve(params.server);
    let ctx = ProvisionContext::new(
        params,
        target,
        PathBuf::from("/work/acme"),
        Layout::Nested,
    );

    assert_eq!(ctx.dev_domain(), dev_domain("acme", Layout::Nested));
    assert_eq!(ctx.dev_domain(), "acme.medialounge.dev.main");
}

#[test]
fn nested_layout_moves_every_local_and_remote_path() {
    let params = parameters("acme", SourceServer::Demo);
    let target = EnvironmentTarget::resolve(params.server);
    let ctx =
        ProvisionContext::new(params, target, PathBuf::from("/work/acme"), Layout::Nested);

    assert_eq!(ctx.app_root(), PathBuf::from("/work/acme/httpdocs"));
    assert_eq!(ctx.remote_project_root(), "~/projects/acme/httpdocs");
}
