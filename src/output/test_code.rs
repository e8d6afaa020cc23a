//! Module rendering the integration test glue code that references the generated fixture files.

use serde::Deserialize;

/// Naming conventions of the consuming test suite.
///
/// The defaults produce Java code for the IRS WireMock integration test. Every field can be overridden
/// from a JSON file; missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TestCodeFormat {
    /// Method the first block of code is meant to be pasted into
    pub target_method: String,
    /// Prefix of the variables holding the node identifiers
    pub variable_prefix: String,
    /// Placed between level and suffix in variable names. Empty by default, which makes names ambiguous
    /// once a level or suffix reaches 10.
    pub variable_separator: String,
    /// Method registering the fixture files of one node
    pub registration_method: String,
    /// Constant holding the business partner number used by the tests
    pub bpn_constant: String,
    /// Prefix of the resource paths of the fixture files
    pub resource_prefix: String,
    /// Method creating the job request for the root node
    pub job_request_method: String,
}

impl Default for TestCodeFormat {
    fn default() -> Self {
        Self {
            target_method:
                "IrsWireMockIntegrationTest.prepareBigTestDataSetAndReturnFirstGlobalAssetId()"
                    .to_string(),
            variable_prefix: "globalAssetId".to_string(),
            variable_separator: String::new(),
            registration_method: "successfulRegistryAndDataRequest".to_string(),
            bpn_constant: "TEST_BPN".to_string(),
            resource_prefix: "integrationtesting/".to_string(),
            job_request_method: "WiremockSupport.jobRequest".to_string(),
        }
    }
}

impl TestCodeFormat {
    /// Variable name of the node at (1-based) `level` with the given file suffix
    pub(crate) fn variable_name(&self, level: usize, suffix: usize) -> String {
        format!(
            "{}{level}{}{suffix}",
            self.variable_prefix, self.variable_separator
        )
    }

    /// Variable name of the root node
    pub(crate) fn root_variable(&self) -> String {
        self.variable_name(1, 0)
    }

    pub(crate) fn declaration(&self, variable: &str, id: &str) -> String {
        format!("final String {variable} = \"{id}\";")
    }

    pub(crate) fn call(
        &self,
        variable: &str,
        manufacturer_name: &str,
        batch_path: &str,
        main_item_path: &str,
    ) -> String {
        let Self {
            registration_method,
            bpn_constant,
            resource_prefix,
            ..
        } = self;
        format!(
            "{registration_method}({variable}, \"{manufacturer_name}\", {bpn_constant},\n\
             \"{resource_prefix}{batch_path}\",\"{resource_prefix}{main_item_path}\");"
        )
    }

    /// Renders the complete snippet: declarations, calls, the return of the root variable,
    /// and the job request for the data set.
    pub(crate) fn render(
        &self,
        declarations: &[String],
        calls: &[String],
        max_depth: usize,
    ) -> String {
        let root = self.root_variable();
        format!(
            "### Insert below code into {target}\n\
             {declarations}\n\n\
             {calls}\n\n\
             return {root};\n\n\
             ### If needed, insert below code into any test methods that use the data set\n\
             request = {job}({root}, {bpn}, {max_depth});",
            target = self.target_method,
            declarations = declarations.join("\n"),
            calls = calls.join("\n"),
            job = self.job_request_method,
            bpn = self.bpn_constant,
        )
    }
}
