/// The built-in deploy manifest: which paths are packaged and what the
/// resulting archive is called. The tool takes no arguments, so both are
/// fixed at build time.
pub struct Manifest {
    /// Top-level files and directories to archive, in order.
    pub include: &'static [&'static str],

    /// Name of the zip file created in the project root.
    pub output_filename: &'static str,
}

impl Manifest {
    pub fn builtin() -> Self {
        Self {
            include: &[
                "src",
                "public",
                "sanity",
                "package.json",
                "package-lock.json",
                "next.config.js",
                "postcss.config.js",
                "tailwind.config.js",
                "tsconfig.json",
                ".eslintrc.json",
                ".env.local",
            ],
            output_filename: "hostinger_deploy.zip",
        }
    }
}
