/// Flags consumed by this plugin and never forwarded to `cf push`.
pub const MAVEN_FLAG_PREFIX: &str = "--maven-";
pub const REMOTE_MANIFEST_FLAG_PREFIX: &str = "--remote-manifest-";

/// Removes every flag starting with `prefix` from the argument sequence.
///
/// A matching token containing `=` is a self-contained `--flag=value` and is
/// dropped alone; any other match also consumes the following token as its
/// value. A match in final position with no value left is treated as an
/// unpaired flag and dropped alone, so the rewriter never fails.
pub fn remove_args_by_prefix(args: &[String], prefix: &str) -> Vec<String> {
    let mut kept = Vec::with_capacity(args.len());
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg.starts_with(prefix) {
            if !arg.contains('=') {
                if iter.next().is_none() {
                    tracing::warn!("flag {} has no value, dropping it alone", arg);
                }
            }
            continue;
        }
        kept.push(arg.clone());
    }

    kept
}

/// Strips both plugin flag families before the sequence is handed to cf.
/// The prefixes are disjoint, so the order of the two passes does not matter.
pub fn strip_plugin_flags(args: &[String]) -> Vec<String> {
    let args = remove_args_by_prefix(args, MAVEN_FLAG_PREFIX);
    remove_args_by_prefix(&args, REMOTE_MANIFEST_FLAG_PREFIX)
}
